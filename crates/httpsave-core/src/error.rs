//! Download error type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`DownloadError`], matching the stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The GET could not be completed; no response was received.
    Transport,
    /// A response arrived but its body could not be read in full.
    BodyRead,
    /// The fetched bytes could not be written to the destination.
    FileWrite,
    /// The existing destination could not be moved to the backup path.
    Rename,
}

/// Error returned by the download operations.
///
/// Every variant leaves the filesystem as it was before the failing step: a
/// transport or body failure never touches the destination, and a rename
/// failure happens before any request is made.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Source is not an absolute http(s) URL, so no request is attempted.
    #[error("cannot fetch {url:?}: {reason}")]
    UnsupportedUrl { url: String, reason: String },

    /// Curl failed before any response headers arrived (DNS, refused, timeout).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Response headers arrived but the body transfer failed.
    #[error("reading response body from {url} failed: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("writing {} failed: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("moving {} to backup {} failed: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DownloadError::UnsupportedUrl { .. } | DownloadError::Transport { .. } => {
                ErrorKind::Transport
            }
            DownloadError::BodyRead { .. } => ErrorKind::BodyRead,
            DownloadError::FileWrite { .. } => ErrorKind::FileWrite,
            DownloadError::Rename { .. } => ErrorKind::Rename,
        }
    }
}
