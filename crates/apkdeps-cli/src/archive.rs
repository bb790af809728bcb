//! Extraction of the APKINDEX member from a repository archive.
//!
//! `APKINDEX.tar.gz` is usually two gzip streams back to back: a signature
//! tarball followed by the index tarball. Both are read as one tar stream.

use std::io::Read;

use apkdeps_error::{Error, ErrorKind, Result};
use flate2::read::MultiGzDecoder;
use tar::Archive;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const INDEX_MEMBER: &str = "APKINDEX";

/// Decoded APKINDEX text from archive `bytes`.
///
/// Bytes without the gzip magic are taken to be index text already, which
/// lets test repositories point straight at a plain `APKINDEX` file. Invalid
/// UTF-8 is replaced rather than rejected. `source` names the archive in
/// errors.
pub fn extract_index(bytes: &[u8], source: &str) -> Result<String> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        tracing::debug!(source, "input is not gzip, treating it as index text");
        return Ok(String::from_utf8_lossy(bytes).into_owned());
    }

    let mut archive = Archive::new(MultiGzDecoder::new(bytes));
    // The signature tarball may or may not end with zero blocks.
    archive.set_ignore_zeros(true);
    let entries = archive
        .entries()
        .map_err(|err| invalid_archive(source, err))?;

    for entry in entries {
        let mut entry = entry.map_err(|err| invalid_archive(source, err))?;
        let member = entry
            .path()
            .map_err(|err| invalid_archive(source, err))?
            .to_string_lossy()
            .into_owned();

        if !member.ends_with(INDEX_MEMBER) {
            tracing::trace!(member = %member, "skipping archive member");
            continue;
        }

        let mut buf = Vec::new();
        entry
            .read_to_end(&mut buf)
            .map_err(|err| invalid_archive(source, err))?;
        tracing::debug!(member = %member, bytes = buf.len(), "extracted index");
        return Ok(String::from_utf8_lossy(&buf).into_owned());
    }

    Err(Error::index_not_found(source).with_operation("archive::extract_index"))
}

fn invalid_archive(source: &str, err: std::io::Error) -> Error {
    Error::new(ErrorKind::ArchiveInvalid, "failed to read tar.gz archive")
        .with_operation("archive::extract_index")
        .with_context("source", source)
        .set_source(err)
}
