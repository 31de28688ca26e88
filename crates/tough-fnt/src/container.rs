//! Splitting and rebuilding decompressed font containers.

use tough_common::{gzip, memchr::memmem};

use crate::{Error, Result, DDS_MAGIC};

/// A decompressed font container, split at its DDS marker.
///
/// Invariant: `header() ++ image()` is exactly the decompressed container and
/// `image()` starts with [`DDS_MAGIC`] when produced by [`split`](Self::split).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontContainer {
    data: Vec<u8>,
    split: usize,
}

impl FontContainer {
    /// Build a container from a header and an image payload.
    ///
    /// The payload is not checked for the DDS marker.
    pub fn new(header: &[u8], image: &[u8]) -> Self {
        let mut data = Vec::with_capacity(header.len() + image.len());
        data.extend_from_slice(header);
        data.extend_from_slice(image);

        Self {
            data,
            split: header.len(),
        }
    }

    /// Split decompressed container bytes at the first DDS marker.
    pub fn split(data: Vec<u8>) -> Result<Self> {
        let split = memmem::find(&data, DDS_MAGIC)
            .ok_or(Error::MarkerNotFound { len: data.len() })?;

        Ok(Self { data, split })
    }

    /// Decompress a `.fnt` gzip stream and split it.
    pub fn decode(compressed: &[u8]) -> Result<Self> {
        Self::split(gzip::decompress(compressed)?)
    }

    /// Compress the container back into a `.fnt` gzip stream.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(gzip::compress(&self.data)?)
    }

    /// The opaque game header preceding the image.
    pub fn header(&self) -> &[u8] {
        &self.data[..self.split]
    }

    /// The image payload, starting at the marker.
    pub fn image(&self) -> &[u8] {
        &self.data[self.split..]
    }

    /// The full decompressed container.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the image payload without copying the header.
    pub fn into_image(mut self) -> Vec<u8> {
        self.data.drain(..self.split);
        self.data
    }
}
