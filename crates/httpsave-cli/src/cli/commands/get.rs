//! `httpsave get <source> [destination]` – download with a conflict policy.

use anyhow::{Context, Result};
use httpsave_core::config;
use httpsave_core::{DownloadPolicy, Downloader, FetchOutcome};

pub fn run_get(source: &str, destination: &str, policy: &DownloadPolicy) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let downloader = Downloader::with_config(cfg);
    let outcome = downloader
        .run(policy, source, destination)
        .with_context(|| format!("download of {} failed", source))?;

    match outcome {
        FetchOutcome::Skipped { path } => {
            println!("{} already exists, not downloaded", path.display());
        }
        FetchOutcome::Written {
            path,
            status,
            bytes,
            backup,
        } => {
            if let Some(backup) = backup {
                println!("Previous file moved to {}", backup.display());
            }
            println!("Saved {} bytes to {} (HTTP {})", bytes, path.display(), status);
        }
    }
    Ok(())
}
