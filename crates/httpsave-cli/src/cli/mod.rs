//! CLI for httpsave.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use httpsave_core::DownloadPolicy;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_check_url, run_config, run_get};

/// Top-level CLI for httpsave.
#[derive(Debug, Parser)]
#[command(name = "httpsave")]
#[command(about = "httpsave: fetch a URL to a local file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a URL. Skips the download if the target file already exists,
    /// unless --overwrite or --backup is given.
    Get {
        /// HTTP/HTTPS URL to download.
        source: String,

        /// Target file, or an existing directory to save into (default: current directory).
        #[arg(default_value = "")]
        destination: String,

        /// Replace an existing target file.
        #[arg(long, conflicts_with = "backup")]
        overwrite: bool,

        /// Move an existing target file to PATH before downloading.
        #[arg(long, value_name = "PATH")]
        backup: Option<PathBuf>,
    },

    /// Check whether a string is an absolute URL with scheme and host.
    CheckUrl {
        /// String to check.
        candidate: String,
    },

    /// Show the config file path and the effective transport settings.
    Config,
}

/// Maps `get` flags to a download policy.
pub fn policy_from_flags(overwrite: bool, backup: Option<PathBuf>) -> DownloadPolicy {
    match (overwrite, backup) {
        (_, Some(backup)) => DownloadPolicy::PreservingOld { backup },
        (true, None) => DownloadPolicy::Overwriting,
        (false, None) => DownloadPolicy::IfNotExists,
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Get {
                source,
                destination,
                overwrite,
                backup,
            } => {
                let policy = policy_from_flags(overwrite, backup);
                run_get(&source, &destination, &policy)?;
                Ok(ExitCode::SUCCESS)
            }
            CliCommand::CheckUrl { candidate } => Ok(run_check_url(&candidate)),
            CliCommand::Config => {
                run_config()?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests;
