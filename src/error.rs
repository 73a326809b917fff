use std::io;

use thiserror::Error;

/// Everything that can stop a checksum computation.
///
/// All variants are terminal for the invocation that produced them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to allocate memory")]
    AllocationFailed,

    #[error("Unsupported argument: {0}")]
    UnsupportedSelector(String),

    #[error("Unable to open file '{path}'")]
    InputUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error reading from {from}")]
    ReadFailed {
        from: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Error processing data: {0}")]
    ProcessingFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Error finalizing checksum: {0}")]
    FinalizationFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
