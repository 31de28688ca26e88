//! File-level extract and repack operations.

use std::path::Path;

use tough_common::file;
use tracing::{debug, info};

use crate::archive::{pack, unpack, Source};
use crate::Result;

/// Extract the translation text from `archive` into `output`.
///
/// Returns where the text was found. Nothing is written on failure.
pub fn extract(archive: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Source> {
    let archive = archive.as_ref();
    let output = output.as_ref();

    info!("Extracting from {}...", archive.display());

    let compressed = file::read(archive)?;
    let unpacked = unpack(&compressed)?;

    match &unpacked.source {
        Source::Archive { member, listing } => {
            info!("Files in archive: {listing:?}");
            info!("Found translation file: {member}");
        }
        Source::RawGzip => info!("Not a tar.gz, extracted plain gzip contents"),
    }

    file::write_atomic(output, &unpacked.content)?;

    info!(
        "Successfully extracted to {} ({} bytes)",
        output.display(),
        unpacked.content.len()
    );

    Ok(unpacked.source)
}

/// Pack the text file `text` into a new `archive`.
///
/// The archive holds a single `translation` member stamped with the text
/// file's modification time.
pub fn repack(text: impl AsRef<Path>, archive: impl AsRef<Path>) -> Result<()> {
    let text = text.as_ref();
    let archive = archive.as_ref();

    let content = file::read(text)?;
    info!("Repacking {} into {}...", text.display(), archive.display());

    let mtime = file::modified_secs(text)?;
    debug!("Member mtime {mtime}, {} bytes", content.len());

    let packed = pack(&content, mtime)?;
    file::write_atomic(archive, &packed)?;

    info!("Successfully created {}", archive.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tough_common::{gzip, ErrorKind};

    use super::*;
    use crate::{Error, DEFAULT_ARCHIVE, DEFAULT_TEXT};

    #[test]
    fn test_repack_then_extract() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join(DEFAULT_TEXT);
        let archive = dir.path().join(DEFAULT_ARCHIVE);
        let original = "INTRO_1=Benvenuto a Tony Tough\r\nINTRO_2=\u{e8} tardi\r\n".as_bytes();
        fs::write(&text, original).unwrap();

        repack(&text, &archive).unwrap();
        assert!(gzip::is_gzip(&fs::read(&archive).unwrap()));

        let roundtrip = dir.path().join("roundtrip.txt");
        let source = extract(&archive, &roundtrip).unwrap();

        assert!(matches!(source, Source::Archive { ref member, .. } if member == "translation"));
        assert_eq!(fs::read(&roundtrip).unwrap(), original);
    }

    #[test]
    fn test_repack_stamps_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join(DEFAULT_TEXT);
        let archive = dir.path().join(DEFAULT_ARCHIVE);
        fs::write(&text, b"x").unwrap();

        repack(&text, &archive).unwrap();

        let tar_data = gzip::decompress(&fs::read(&archive).unwrap()).unwrap();
        let mut reader = tar::Archive::new(&tar_data[..]);
        let entry = reader.entries().unwrap().next().unwrap().unwrap();
        assert_eq!(entry.header().mtime().unwrap(), file::modified_secs(&text).unwrap());
    }

    #[test]
    fn test_extract_raw_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join(DEFAULT_ARCHIVE);
        let output = dir.path().join(DEFAULT_TEXT);
        fs::write(&archive, gzip::compress(b"plain gzip text").unwrap()).unwrap();

        assert_eq!(extract(&archive, &output).unwrap(), Source::RawGzip);
        assert_eq!(fs::read(&output).unwrap(), b"plain gzip text");
    }

    #[test]
    fn test_extract_unrecognized_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join(DEFAULT_ARCHIVE);
        let output = dir.path().join(DEFAULT_TEXT);
        fs::write(&archive, b"PK\x03\x04zip data").unwrap();

        match extract(&archive, &output).unwrap_err() {
            Error::UnrecognizedFormat { signature } => assert_eq!(signature, b"PK"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_extract_missing_archive() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(dir.path().join(DEFAULT_ARCHIVE), dir.path().join(DEFAULT_TEXT))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_repack_missing_text() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join(DEFAULT_ARCHIVE);
        let err = repack(dir.path().join(DEFAULT_TEXT), &archive).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!archive.exists());
    }
}
