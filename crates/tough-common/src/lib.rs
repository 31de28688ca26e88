//! Common utilities for Tough tools.
//!
//! This crate provides the pieces shared by the font and translation converters:
//!
//! - [`Error`] and [`ErrorKind`] - The error taxonomy every operation reports through
//! - [`gzip`] - Whole-buffer gzip compression and decompression
//! - [`file`] - Input reading with not-found detection and atomic output writing

mod error;

pub mod file;
pub mod gzip;

pub use error::{Error, ErrorKind, Result};

/// Re-export memchr for marker searching
pub use memchr;
