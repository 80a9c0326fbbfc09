//! Fetch-and-write: one GET, whole body in memory, one file write.
//!
//! The transport is a trait so policies can be exercised without a network;
//! the production implementation is [`CurlTransport`] (libcurl, blocking).

mod transport;

pub use transport::CurlTransport;

use crate::error::DownloadError;
use std::fs;
use std::path::Path;

/// A received HTTP response: final status code and full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET and returns the complete response.
///
/// Implementations return `Err` only when no usable response exists
/// ([`DownloadError::Transport`], [`DownloadError::UnsupportedUrl`]) or the
/// body could not be read ([`DownloadError::BodyRead`]). Any status code,
/// including 4xx/5xx, is a successful `get`.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, DownloadError>;
}

/// What [`fetch_and_write`] put on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub status: u32,
    pub bytes: usize,
}

/// GETs `source` and writes the full response body to `path`, creating or truncating it.
///
/// # Non-success statuses are written
///
/// The status code is not inspected. A 404 or 500 response is not an error:
/// its body (an error page, a message) lands in `path` exactly like a 200 body
/// would, and the status is only reported back in the [`WriteSummary`]. Only a
/// transport failure, a body read failure or a file write failure is an `Err`.
/// The destination is untouched unless the write itself runs.
pub fn fetch_and_write<T: Transport + ?Sized>(
    transport: &T,
    source: &str,
    path: &Path,
) -> Result<WriteSummary, DownloadError> {
    let response = transport.get(source)?;
    if !response.is_success() {
        tracing::warn!(
            "GET {} returned HTTP {}; writing response body to {} anyway",
            source,
            response.status,
            path.display()
        );
    }

    fs::write(path, &response.body).map_err(|e| DownloadError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(
        "wrote {} bytes from {} to {}",
        response.body.len(),
        source,
        path.display()
    );

    Ok(WriteSummary {
        status: response.status,
        bytes: response.body.len(),
    })
}
