//! Download policies: what to do when the destination file already exists.
//!
//! Every policy resolves the destination first (see
//! [`resolve_destination`](crate::destination::resolve_destination)), then
//! either skips the request or runs a single [`fetch_and_write`].

use crate::config::FetchConfig;
use crate::destination::resolve_destination;
use crate::error::DownloadError;
use crate::fetch::{fetch_and_write, CurlTransport, Transport, WriteSummary};
use std::fs;
use std::path::{Path, PathBuf};

/// How to treat a destination file that is already present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadPolicy {
    /// Keep the existing file and make no request.
    IfNotExists,
    /// Replace the existing file's content with the fetched body.
    Overwriting,
    /// Rename the existing file to `backup`, then fetch into the vacated path.
    PreservingOld { backup: PathBuf },
}

/// Result of a successful policy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Destination already existed; nothing was requested or written.
    Skipped { path: PathBuf },
    /// Body was fetched and written. `backup` is set when an old file was moved aside.
    Written {
        path: PathBuf,
        status: u32,
        bytes: usize,
        backup: Option<PathBuf>,
    },
}

impl FetchOutcome {
    /// The resolved destination path.
    pub fn path(&self) -> &Path {
        match self {
            FetchOutcome::Skipped { path } | FetchOutcome::Written { path, .. } => path,
        }
    }

    fn written(path: PathBuf, summary: WriteSummary, backup: Option<PathBuf>) -> Self {
        FetchOutcome::Written {
            path,
            status: summary.status,
            bytes: summary.bytes,
            backup,
        }
    }
}

/// Runs download policies over a [`Transport`].
#[derive(Debug, Clone, Default)]
pub struct Downloader<T = CurlTransport> {
    transport: T,
}

impl Downloader<CurlTransport> {
    /// Downloader over libcurl with the given transport settings.
    pub fn with_config(config: FetchConfig) -> Self {
        Self::new(CurlTransport::new(config))
    }
}

impl<T: Transport> Downloader<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Dispatches to the operation matching `policy`.
    pub fn run(
        &self,
        policy: &DownloadPolicy,
        source: &str,
        destination: &str,
    ) -> Result<FetchOutcome, DownloadError> {
        match policy {
            DownloadPolicy::IfNotExists => self.if_not_exists(source, destination),
            DownloadPolicy::Overwriting => self.overwriting(source, destination),
            DownloadPolicy::PreservingOld { backup } => {
                self.preserving_old(source, destination, backup)
            }
        }
    }

    /// Fetches `source` only if the resolved destination does not exist yet.
    pub fn if_not_exists(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<FetchOutcome, DownloadError> {
        let path = resolve_destination(destination, source);
        if path.exists() {
            tracing::info!("{} already exists, skipping {}", path.display(), source);
            return Ok(FetchOutcome::Skipped { path });
        }
        let summary = fetch_and_write(&self.transport, source, &path)?;
        Ok(FetchOutcome::written(path, summary, None))
    }

    /// Fetches `source` and writes it over whatever is at the resolved destination.
    pub fn overwriting(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<FetchOutcome, DownloadError> {
        let path = resolve_destination(destination, source);
        let summary = fetch_and_write(&self.transport, source, &path)?;
        Ok(FetchOutcome::written(path, summary, None))
    }

    /// Moves an existing destination to `backup`, then fetches `source` into it.
    ///
    /// If the rename fails the request is never made and the destination is
    /// left as it was. With no existing destination, `backup` is not touched.
    /// The rename and the fetch are two separate steps: a crash in between
    /// leaves only the backup on disk.
    pub fn preserving_old(
        &self,
        source: &str,
        destination: &str,
        backup: &Path,
    ) -> Result<FetchOutcome, DownloadError> {
        let path = resolve_destination(destination, source);
        let mut moved = None;
        if path.exists() {
            fs::rename(&path, backup).map_err(|e| DownloadError::Rename {
                from: path.clone(),
                to: backup.to_path_buf(),
                source: e,
            })?;
            tracing::info!("moved {} to {}", path.display(), backup.display());
            moved = Some(backup.to_path_buf());
        }
        let summary = fetch_and_write(&self.transport, source, &path)?;
        Ok(FetchOutcome::written(path, summary, moved))
    }
}

/// Downloads `source` to `destination` unless the resolved file already exists.
pub fn download_if_not_exists(source: &str, destination: &str) -> Result<(), DownloadError> {
    Downloader::with_config(FetchConfig::default())
        .if_not_exists(source, destination)
        .map(|_| ())
}

/// Downloads `source` to `destination`, replacing any existing file content.
pub fn download_overwriting(source: &str, destination: &str) -> Result<(), DownloadError> {
    Downloader::with_config(FetchConfig::default())
        .overwriting(source, destination)
        .map(|_| ())
}

/// Downloads `source` to `destination`, first moving an existing file to `backup_path`.
pub fn download_preserving_old(
    source: &str,
    destination: &str,
    backup_path: &str,
) -> Result<(), DownloadError> {
    Downloader::with_config(FetchConfig::default())
        .preserving_old(source, destination, Path::new(backup_path))
        .map(|_| ())
}
