//! Error types for tough-common.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a failure, shared by every Tough crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An expected input file does not exist.
    NotFound,
    /// The input exists but its contents are not in the expected format.
    Format,
    /// Reading, writing or inspecting a file failed.
    Io,
}

/// Common error type for Tough operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist.
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    /// I/O error on a specific file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Data is not a valid gzip stream.
    #[error("decompression error: {0}")]
    Decompression(String),

    /// Compressing into gzip failed.
    #[error("compression error: {0}")]
    Compression(String),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Decompression(_) => ErrorKind::Format,
            Self::Io { .. } | Self::Compression(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = Error::io("a.fnt", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "a.fnt not found");
    }

    #[test]
    fn test_other_io_errors_keep_their_source() {
        let err = Error::io("a.fnt", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_decompression_is_a_format_error() {
        assert_eq!(Error::Decompression("bad".into()).kind(), ErrorKind::Format);
    }
}
