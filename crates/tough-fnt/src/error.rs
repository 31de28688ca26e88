//! Error types for font container handling.

use thiserror::Error;
use tough_common::ErrorKind;

/// Errors that can occur when working with font containers.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] tough_common::Error),

    /// The decompressed container has no DDS image in it.
    #[error("DDS marker not found in {len} bytes of container data")]
    MarkerNotFound { len: usize },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Common(e) => e.kind(),
            Self::MarkerNotFound { .. } => ErrorKind::Format,
        }
    }
}

/// Result type for font container operations.
pub type Result<T> = std::result::Result<T, Error>;
