//! FRM/TEX header resolution for repacking.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use tough_common::{file, ErrorKind};

use crate::{Error, FontContainer, Result, DEFAULT_HEADER};

/// Why the default header was used instead of an original container's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No original container was given.
    NotSupplied,
    /// The original container does not exist.
    Missing,
    /// The original container is not a valid gzip stream.
    NotGzip(String),
    /// The original container has no DDS marker.
    MarkerAbsent,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupplied => f.write_str("no original container given"),
            Self::Missing => f.write_str("original container not found"),
            Self::NotGzip(e) => write!(f, "original container unreadable: {e}"),
            Self::MarkerAbsent => f.write_str("DDS marker not found in original"),
        }
    }
}

/// Where a resolved header came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderOrigin {
    /// Copied from the original container.
    Original,
    /// [`DEFAULT_HEADER`], for the given reason.
    Default(FallbackReason),
}

/// A header ready to be prepended to an image payload.
#[derive(Debug, Clone)]
pub struct ResolvedHeader {
    pub bytes: Cow<'static, [u8]>,
    pub origin: HeaderOrigin,
}

impl ResolvedHeader {
    fn default_for(reason: FallbackReason) -> Self {
        Self {
            bytes: Cow::Borrowed(DEFAULT_HEADER),
            origin: HeaderOrigin::Default(reason),
        }
    }
}

/// Resolve the header to use when repacking.
///
/// The header of `original` is reused when it is a readable gzip stream
/// containing a DDS marker. A missing file, a stream that fails to
/// decompress, or a missing marker falls back to [`DEFAULT_HEADER`]. Any
/// other failure while reading `original` is returned as an error.
pub fn resolve_header(original: Option<&Path>) -> Result<ResolvedHeader> {
    let Some(path) = original else {
        return Ok(ResolvedHeader::default_for(FallbackReason::NotSupplied));
    };

    let compressed = match file::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(ResolvedHeader::default_for(FallbackReason::Missing));
        }
        Err(e) => return Err(e.into()),
    };

    match FontContainer::decode(&compressed) {
        Ok(container) => Ok(ResolvedHeader {
            bytes: Cow::Owned(container.header().to_vec()),
            origin: HeaderOrigin::Original,
        }),
        Err(Error::MarkerNotFound { .. }) => {
            Ok(ResolvedHeader::default_for(FallbackReason::MarkerAbsent))
        }
        Err(e) if e.kind() == ErrorKind::Format => Ok(ResolvedHeader::default_for(
            FallbackReason::NotGzip(e.to_string()),
        )),
        Err(e) => Err(e),
    }
}
