//! Gzip compression utilities.

use std::io::{Read, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::{Error, Result};

/// Gzip stream signature.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Compression level used for every container the tools write (zlib level 9).
pub const LEVEL: Compression = Compression::best();

/// Check whether `data` starts with the gzip signature.
#[inline]
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Decompress a complete gzip stream (all members) into memory.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if !is_gzip(data) {
        return Err(Error::Decompression("not a gzip stream".into()));
    }

    let mut output = Vec::with_capacity(data.len() * 4);
    MultiGzDecoder::new(data)
        .read_to_end(&mut output)
        .map_err(|e| Error::Decompression(e.to_string()))?;

    Ok(output)
}

/// Compress `data` into a single-member gzip stream.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2), LEVEL);
    encoder
        .write_all(data)
        .map_err(|e| Error::Compression(e.to_string()))?;

    encoder.finish().map_err(|e| Error::Compression(e.to_string()))
}
