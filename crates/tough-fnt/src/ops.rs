//! File-level extract and repack operations.

use std::path::{Path, PathBuf};

use tough_common::file;
use tracing::{debug, info, warn};

use crate::header::{resolve_header, HeaderOrigin};
use crate::{FontContainer, Result, DDS_MAGIC};

/// Suffixes stripped from a repack input's name before adding `.fnt`.
const REPACK_STRIP_SUFFIXES: [&str; 3] = [".dds", ".frm", ".bin"];

/// Default output for [`extract`]: the input with its extension replaced by `.dds`.
pub fn default_extract_path(input: &Path) -> PathBuf {
    input.with_extension("dds")
}

/// Default output for [`repack`].
///
/// Drops the input's extension, then any trailing `.dds`, `.frm` or `.bin`
/// left on the stem, and appends `.fnt`. `FontObj.dds` becomes `FontObj.fnt`
/// and `FontObj.dds.bin` becomes `FontObj.fnt`.
pub fn default_repack_path(input: &Path) -> PathBuf {
    let mut base = input.with_extension("");

    // Names that are not valid UTF-8 keep their remaining suffixes.
    if let Some(name) = base.file_name().and_then(|n| n.to_str()).map(str::to_owned) {
        let mut stem = name.as_str();
        for suffix in REPACK_STRIP_SUFFIXES {
            if let Some(stripped) = stem.strip_suffix(suffix) {
                stem = stripped;
            }
        }
        if stem.len() != name.len() {
            base.set_file_name(stem);
        }
    }

    let mut name = base.into_os_string();
    name.push(".fnt");
    PathBuf::from(name)
}

/// Extract the DDS image from a `.fnt` container.
///
/// Writes everything from the first `"DDS "` marker onward to `output`
/// (default: [`default_extract_path`]) and returns the path written. Nothing
/// is written when the container cannot be decoded.
pub fn extract(input: impl AsRef<Path>, output: Option<&Path>) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = output.map_or_else(|| default_extract_path(input), Path::to_path_buf);

    info!("Extracting from {}...", input.display());

    let compressed = file::read(input)?;
    let container = FontContainer::decode(&compressed)?;

    info!(
        "Found FRM/TEX header ({} bytes), removing before DDS...",
        container.header().len()
    );

    let image = container.into_image();
    file::write_atomic(&output, &image)?;

    info!(
        "Successfully extracted to {} ({} bytes, DDS image only)",
        output.display(),
        image.len()
    );

    Ok(output)
}

/// Repack a DDS image into a `.fnt` container.
///
/// The header is taken from `original` when possible (see
/// [`resolve_header`]), otherwise [`DEFAULT_HEADER`](crate::DEFAULT_HEADER)
/// is used. Returns the path written (default: [`default_repack_path`]).
pub fn repack(
    input: impl AsRef<Path>,
    output: Option<&Path>,
    original: Option<&Path>,
) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = output.map_or_else(|| default_repack_path(input), Path::to_path_buf);

    let image = file::read(input)?;
    info!("Repacking {} into {}...", input.display(), output.display());

    if !image.starts_with(DDS_MAGIC) {
        warn!("Input file doesn't start with 'DDS ' marker");
    }

    let header = resolve_header(original)?;
    match &header.origin {
        HeaderOrigin::Original => info!(
            "Using FRM/TEX header from original file ({} bytes)",
            header.bytes.len()
        ),
        HeaderOrigin::Default(reason) => {
            debug!("Default header chosen: {reason}");
            info!("Using default FRM/TEX header ({} bytes)", header.bytes.len());
        }
    }

    let container = FontContainer::new(&header.bytes, &image);
    let compressed = container.encode()?;
    file::write_atomic(&output, &compressed)?;

    info!(
        "Successfully created {} ({} bytes, {} compressed)",
        output.display(),
        container.as_bytes().len(),
        compressed.len()
    );

    Ok(output)
}
