//! Font container handling for Tony Tough 2.
//!
//! A `.fnt` file is a gzip stream wrapping an opaque game header followed by
//! a DDS texture:
//!
//! ```text
//! gzip( [FRM/TEX header ...][DDS image ...] )
//! ```
//!
//! The header has no structure this crate understands. It is located by
//! searching for the first `"DDS "` marker and is either carried over from an
//! original container or replaced by [`DEFAULT_HEADER`] when repacking.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tough_fnt::{extract, repack};
//!
//! // FontObj.fnt -> FontObj.dds
//! let dds = extract("FontObj.fnt", None)?;
//!
//! // Edited FontObj.dds -> FontObj.fnt, reusing the original header
//! repack(&dds, None, Some(Path::new("FontObj.fnt")))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod container;
mod error;
mod header;
mod ops;

pub use container::FontContainer;
pub use error::{Error, Result};
pub use header::{resolve_header, FallbackReason, HeaderOrigin, ResolvedHeader};
pub use ops::{default_extract_path, default_repack_path, extract, repack};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";

/// FRM/TEX header used when no original container is available.
///
/// `FRM\x02\0\0\0TEX\x80\0\x01\0`
pub const DEFAULT_HEADER: &[u8; 14] = b"FRM\x02\x00\x00\x00TEX\x80\x00\x01\x00";
