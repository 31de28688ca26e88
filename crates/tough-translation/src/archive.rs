//! Reading and building translation archives in memory.

use std::io::{self, Read};

use tough_common::gzip;

use crate::detect::{check_signature, looks_like_tar, normalize_checksum, BLOCK_SIZE};
use crate::{Error, Result, MEMBER_NAME};

/// Where extracted translation text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A member of a tar archive.
    Archive {
        /// Name of the selected member as stored in the archive.
        member: String,
        /// Names of every entry in the archive, in order.
        listing: Vec<String>,
    },
    /// A bare gzip stream without archive structure.
    RawGzip,
}

/// Translation text recovered from a container.
#[derive(Debug, Clone)]
pub struct Unpacked {
    pub content: Vec<u8>,
    pub source: Source,
}

/// Whether an archive entry name refers to the translation member.
fn is_translation(name: &str) -> bool {
    let base = name.rsplit('/').next().unwrap_or(name);
    name.eq_ignore_ascii_case(MEMBER_NAME) || base.eq_ignore_ascii_case(MEMBER_NAME)
}

/// Select the translation member from an uncompressed tar archive.
///
/// The first non-directory entry whose name or base name is `translation`
/// (ignoring ASCII case) wins. A damaged header after the first entry ends
/// the archive; entries before it are kept.
pub fn find_member(tar_data: &[u8]) -> Result<Unpacked> {
    let mut archive = tar::Archive::new(tar_data);
    let mut listing = Vec::new();
    let mut selected = None;

    for entry in archive.entries().map_err(Error::Tar)? {
        let mut entry = match entry {
            Ok(entry) => entry,
            Err(_) if !listing.is_empty() => break,
            Err(e) => return Err(Error::Tar(e)),
        };
        let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();

        if selected.is_none() && !entry.header().entry_type().is_dir() && is_translation(&name) {
            let mut content = Vec::new();
            entry.read_to_end(&mut content).map_err(Error::Tar)?;
            if content.len() as u64 != entry.size() {
                return Err(Error::Tar(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("member {name} is truncated"),
                )));
            }
            selected = Some((name.clone(), content));
        }

        listing.push(name);
    }

    match selected {
        Some((member, content)) => Ok(Unpacked {
            content,
            source: Source::Archive { member, listing },
        }),
        None => Err(Error::MemberNotFound { available: listing }),
    }
}

/// Recover the translation text from a compressed container.
pub fn unpack(compressed: &[u8]) -> Result<Unpacked> {
    check_signature(compressed)?;
    let mut data = gzip::decompress(compressed)?;

    if looks_like_tar(&data) {
        normalize_checksum(&mut data);
        find_member(&data)
    } else {
        Ok(Unpacked {
            content: data,
            source: Source::RawGzip,
        })
    }
}

/// Build a compressed archive holding `content` as the `translation` member.
pub fn pack(content: &[u8], mtime: u64) -> Result<Vec<u8>> {
    let mut header = tar::Header::new_ustar();
    header.set_path(MEMBER_NAME).map_err(Error::Build)?;
    header.set_entry_type(tar::EntryType::Regular);
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(mtime);
    header.set_cksum();

    let mut builder = tar::Builder::new(Vec::with_capacity(content.len() + 3 * BLOCK_SIZE));
    builder.append(&header, content).map_err(Error::Build)?;
    let tar_data = builder.into_inner().map_err(Error::Build)?;

    Ok(gzip::compress(&tar_data)?)
}
