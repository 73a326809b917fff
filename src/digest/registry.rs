use log::debug;

use crate::error::{Error, Result};

/// Which algorithm family a method runs, and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Sum of bytes truncated to the given number of bits.
    Sum(u32),
    Sha256,
}

/// Static description of one selectable checksum method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Short display name.
    pub name: &'static str,
    /// Command-line argument selecting this method.
    pub selector: &'static str,
    pub kind: MethodKind,
    /// Size of the finished digest in bytes.
    pub output_size: usize,
    /// If non-zero, input must be fed in chunks of exactly this size
    /// (the last chunk may be shorter).
    pub chunk_size: usize,
}

/// Registered methods, in the order they are listed in the usage text.
pub static METHODS: [Method; 5] = [
    Method { name: "8-bit sum", selector: "-8", kind: MethodKind::Sum(8), output_size: 1, chunk_size: 0 },
    Method { name: "16-bit sum", selector: "-16", kind: MethodKind::Sum(16), output_size: 2, chunk_size: 0 },
    Method { name: "32-bit sum", selector: "-32", kind: MethodKind::Sum(32), output_size: 4, chunk_size: 0 },
    Method { name: "64-bit sum", selector: "-64", kind: MethodKind::Sum(64), output_size: 8, chunk_size: 0 },
    Method { name: "SHA-256 hash", selector: "-sha256", kind: MethodKind::Sha256, output_size: 32, chunk_size: 0 },
];

/// Looks up a method by exact selector match.
pub fn find(selector: &str) -> Result<&'static Method> {
    let method = METHODS
        .iter()
        .find(|method| method.selector == selector)
        .ok_or_else(|| Error::UnsupportedSelector(selector.to_string()))?;
    debug!("using method \"{}\"", method.name);
    Ok(method)
}
