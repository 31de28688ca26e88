//! File helpers shared by the converters.
//!
//! Inputs are read whole, outputs are written whole. Output goes to a
//! temporary file next to the destination and is renamed into place only
//! once every byte has been written, so a failed operation never leaves a
//! truncated output behind.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Read an entire input file, reporting a missing file as [`Error::NotFound`].
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Write `data` to `path` atomically.
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    temp.write_all(data).map_err(|e| Error::io(temp.path(), e))?;
    temp.flush().map_err(|e| Error::io(temp.path(), e))?;

    // Dropping `temp` on any error above removes it.
    temp.persist(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

/// Modification time of `path` in whole seconds since the Unix epoch.
///
/// Times before the epoch clamp to zero.
pub fn modified_secs<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| Error::io(path, e))?;

    Ok(unix_secs(modified))
}

fn unix_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
