//! Error types for translation container handling.

use std::fmt;
use std::io;

use thiserror::Error;
use tough_common::ErrorKind;

/// Errors that can occur when working with translation containers.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] tough_common::Error),

    /// Input is not gzip-compressed.
    #[error("unknown file format (magic: {})", Hex(.signature))]
    UnrecognizedFormat { signature: Vec<u8> },

    /// The archive has no `translation` member.
    #[error("'translation' file not found in archive (available files: {available:?})")]
    MemberNotFound { available: Vec<String> },

    /// The tar stream is damaged.
    #[error("invalid tar archive: {0}")]
    Tar(#[source] io::Error),

    /// Building the output archive failed.
    #[error("failed to build archive: {0}")]
    Build(#[source] io::Error),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Common(e) => e.kind(),
            Self::UnrecognizedFormat { .. } | Self::MemberNotFound { .. } | Self::Tar(_) => {
                ErrorKind::Format
            }
            Self::Build(_) => ErrorKind::Io,
        }
    }
}

/// Result type for translation container operations.
pub type Result<T> = std::result::Result<T, Error>;

struct Hex<'a>(&'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_reported_in_hex() {
        let err = Error::UnrecognizedFormat {
            signature: vec![0x50, 0x4B],
        };
        assert_eq!(err.to_string(), "unknown file format (magic: 504b)");
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_member_not_found_lists_names() {
        let err = Error::MemberNotFound {
            available: vec!["readme".into(), "data/strings".into()],
        };
        assert_eq!(
            err.to_string(),
            "'translation' file not found in archive (available files: [\"readme\", \"data/strings\"])"
        );
    }
}
