//! Subcommand handlers.

mod check_url;
mod config;
mod get;

pub use check_url::run_check_url;
pub use config::run_config;
pub use get::run_get;
