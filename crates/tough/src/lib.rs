//! Tough - Tony Tough 2 container conversion library.
//!
//! This crate provides a unified interface to the Tough crates:
//!
//! - [`tough_common`] - Error taxonomy, gzip and file helpers
//! - [`tough_fnt`] - `.fnt` font containers (FRM/TEX header + DDS image)
//! - [`tough_translation`] - `translation.dat` text archives
//!
//! # Example
//!
//! ```no_run
//! use tough::prelude::*;
//!
//! let dds = fnt::extract("FontObj.fnt", None)?;
//! fnt::repack(&dds, None, None)?;
//!
//! translation::extract(translation::DEFAULT_ARCHIVE, translation::DEFAULT_TEXT)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use tough_common as common;
pub use tough_fnt as fnt;
pub use tough_translation as translation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{fnt, translation};
    pub use tough_common::{Error, ErrorKind};
    pub use tough_fnt::{FontContainer, HeaderOrigin, DDS_MAGIC, DEFAULT_HEADER};
    pub use tough_translation::{Source, MEMBER_NAME};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
