//! Flexible checksum utility.
//!
//! A small registry of streaming digest methods (byte sums of several widths
//! and SHA-256) behind one incremental `init`/`process`/`finish` contract,
//! plus the command-line driver that feeds them from a file or stdin.

pub mod utils;
pub mod digest;
pub mod error;
pub mod cli;

pub use digest::{Checksum, Context};
pub use digest::registry::{Method, MethodKind, METHODS};
pub use error::{Error, Result};
