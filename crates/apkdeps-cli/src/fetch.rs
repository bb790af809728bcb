//! Retrieval of the repository archive.

use std::fs;
use std::path::Path;
use std::time::Duration;

use apkdeps_error::{Error, ErrorKind, Result};
use reqwest::blocking::Client;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Archive bytes from `source`.
///
/// In test mode `source` is a local file path; otherwise it is downloaded
/// over HTTP(S).
pub fn fetch_archive(source: &str, test: bool) -> Result<Vec<u8>> {
    if test {
        read_local(Path::new(source))
    } else {
        download(source)
    }
}

fn read_local(path: &Path) -> Result<Vec<u8>> {
    tracing::debug!(path = %path.display(), "reading test repository archive");
    fs::read(path).map_err(|err| {
        Error::io_at(err, path.display().to_string()).with_operation("fetch::read_local")
    })
}

#[tracing::instrument(skip_all, fields(url = url))]
fn download(url: &str) -> Result<Vec<u8>> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|err| {
            Error::new(ErrorKind::FetchFailed, "failed to build HTTP client")
                .permanent()
                .with_operation("fetch::download")
                .set_source(err)
        })?;

    let response = client
        .get(url)
        .send()
        .map_err(|err| transport_error(url, err))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::http_status(url, status.as_u16()).with_operation("fetch::download"));
    }

    let bytes = response.bytes().map_err(|err| transport_error(url, err))?;
    tracing::debug!(bytes = bytes.len(), "downloaded archive");
    Ok(bytes.to_vec())
}

fn transport_error(url: &str, err: reqwest::Error) -> Error {
    let (kind, message) = if err.is_timeout() {
        (ErrorKind::Timeout, "request timed out")
    } else {
        (ErrorKind::FetchFailed, "request failed")
    };
    Error::new(kind, message)
        .temporary()
        .with_operation("fetch::download")
        .with_context("url", url)
        .set_source(err)
}
