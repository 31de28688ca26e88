//! Container format detection.
//!
//! Two decisions are made before anything is extracted:
//!
//! 1. The compressed input must start with the gzip signature.
//! 2. The decompressed stream is treated as a tar archive only if its first
//!    512-byte block is a valid tar header: not all zeros, with a stored
//!    checksum that matches the block. Anything else is a raw gzip payload.
//!
//! Old tar writers summed header bytes as signed values. Such a first header
//! is accepted here and rewritten by `normalize_checksum` before parsing.

use std::ops::Range;

use tough_common::gzip::{self, GZIP_MAGIC};

use crate::{Error, Result};

/// Size of a tar header block.
pub const BLOCK_SIZE: usize = 512;

/// Location of the checksum field inside a tar header.
const CHECKSUM_FIELD: Range<usize> = 148..156;

/// Verify that `data` starts with the gzip signature.
///
/// On failure the error carries the bytes actually found (up to two).
pub fn check_signature(data: &[u8]) -> Result<()> {
    if gzip::is_gzip(data) {
        return Ok(());
    }

    let len = data.len().min(GZIP_MAGIC.len());
    Err(Error::UnrecognizedFormat {
        signature: data[..len].to_vec(),
    })
}

/// Check whether decompressed data starts with a valid tar header block.
pub fn looks_like_tar(data: &[u8]) -> bool {
    let Some(block) = data.get(..BLOCK_SIZE) else {
        return false;
    };

    if block.iter().all(|&b| b == 0) {
        return false;
    }

    let Ok(stored) = tar::Header::from_byte_slice(block).cksum() else {
        return false;
    };

    let (unsigned, signed) = block_checksums(block);
    i64::from(stored) == unsigned || i64::from(stored) == signed
}

/// Rewrite a signed-sum checksum in the first header block as the unsigned sum.
///
/// Does nothing unless the stored checksum is the signed sum only.
pub(crate) fn normalize_checksum(data: &mut [u8]) {
    let Some(block) = data.get_mut(..BLOCK_SIZE) else {
        return;
    };

    let Ok(stored) = tar::Header::from_byte_slice(block).cksum() else {
        return;
    };

    let (unsigned, signed) = block_checksums(block);
    if i64::from(stored) == signed && signed != unsigned {
        let field = format!("{unsigned:06o}\0 ");
        block[CHECKSUM_FIELD].copy_from_slice(field.as_bytes());
    }
}

/// Sum a header block with the checksum field read as spaces.
///
/// Returns both the unsigned and the signed-byte sums; old tar writers used
/// the latter.
pub(crate) fn block_checksums(block: &[u8]) -> (i64, i64) {
    block
        .iter()
        .enumerate()
        .map(|(i, &b)| if CHECKSUM_FIELD.contains(&i) { b' ' } else { b })
        .fold((0, 0), |(unsigned, signed), b| {
            (unsigned + i64::from(b), signed + i64::from(b as i8))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_block(name: &str) -> Vec<u8> {
        let mut header = tar::Header::new_ustar();
        header.set_path(name).unwrap();
        header.set_size(0);
        header.set_mode(0o644);
        header.set_cksum();
        header.as_bytes().to_vec()
    }

    #[test]
    fn test_signature() {
        check_signature(&[0x1F, 0x8B, 0x08]).unwrap();

        match check_signature(b"PK\x03\x04").unwrap_err() {
            Error::UnrecognizedFormat { signature } => assert_eq!(signature, b"PK"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_signature_of_tiny_files() {
        match check_signature(&[0x1F]).unwrap_err() {
            Error::UnrecognizedFormat { signature } => assert_eq!(signature, [0x1Fu8]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(check_signature(&[]).is_err());
    }

    #[test]
    fn test_valid_header_block() {
        assert!(looks_like_tar(&header_block("translation")));
    }

    #[test]
    fn test_signed_checksum_accepted() {
        let mut block = header_block("translation");
        // A high byte in the name makes the signed and unsigned sums differ.
        block[20] = 0xE9;
        let (_, signed) = block_checksums(&block);
        let field = format!("{signed:06o}\0 ");
        block[CHECKSUM_FIELD].copy_from_slice(field.as_bytes());

        assert!(looks_like_tar(&block));
    }

    #[test]
    fn test_normalize_signed_checksum() {
        let mut block = header_block("translation");
        block[20] = 0xE9;
        let (unsigned, signed) = block_checksums(&block);
        let field = format!("{signed:06o}\0 ");
        block[CHECKSUM_FIELD].copy_from_slice(field.as_bytes());

        normalize_checksum(&mut block);

        let stored = tar::Header::from_byte_slice(&block).cksum().unwrap();
        assert_eq!(i64::from(stored), unsigned);
        assert!(looks_like_tar(&block));
    }

    #[test]
    fn test_normalize_leaves_unsigned_checksum() {
        let block = header_block("translation");
        let mut normalized = block.clone();

        normalize_checksum(&mut normalized);
        normalize_checksum(&mut [0; 4]);

        assert_eq!(normalized, block);
    }

    #[test]
    fn test_rejects_plain_text() {
        let text = "Hello=Ciao\n".repeat(100);
        assert!(!looks_like_tar(text.as_bytes()));
    }

    #[test]
    fn test_rejects_short_and_empty() {
        assert!(!looks_like_tar(b"translation"));
        assert!(!looks_like_tar(&[0; BLOCK_SIZE * 2]));
    }

    #[test]
    fn test_rejects_checksum_mismatch() {
        let mut block = header_block("translation");
        block[0] = b'T';
        assert!(!looks_like_tar(&block));
    }
}
