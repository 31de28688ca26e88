//! Translation container handling for Tony Tough 2.
//!
//! `translation.dat` is normally a gzip-compressed tar archive holding a
//! single member named `translation`. Some builds ship the text as a bare
//! gzip stream instead; extraction accepts both, repacking always produces
//! the tar form.
//!
//! # Example
//!
//! ```no_run
//! use tough_translation::{extract, repack, DEFAULT_ARCHIVE, DEFAULT_TEXT};
//!
//! extract(DEFAULT_ARCHIVE, DEFAULT_TEXT)?;
//! // ... edit translation.txt ...
//! repack(DEFAULT_TEXT, DEFAULT_ARCHIVE)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod archive;
mod detect;
mod error;
mod ops;

pub use archive::{find_member, pack, unpack, Source, Unpacked};
pub use detect::{check_signature, looks_like_tar, BLOCK_SIZE};
pub use error::{Error, Result};
pub use ops::{extract, repack};

/// Name of the archive member holding the translation text.
pub const MEMBER_NAME: &str = "translation";

/// Default archive path.
pub const DEFAULT_ARCHIVE: &str = "translation.dat";

/// Default plain-text path.
pub const DEFAULT_TEXT: &str = "translation.txt";
