pub mod config;
pub mod logging;

pub mod destination;
pub mod error;
pub mod fetch;
pub mod policy;
pub mod url_model;

pub use error::{DownloadError, ErrorKind};
pub use policy::{
    download_if_not_exists, download_overwriting, download_preserving_old, DownloadPolicy,
    Downloader, FetchOutcome,
};
pub use url_model::is_valid_url;
