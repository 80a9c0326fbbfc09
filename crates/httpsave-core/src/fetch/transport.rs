//! Blocking libcurl transport.

use super::{HttpResponse, Transport};
use crate::config::FetchConfig;
use crate::error::DownloadError;
use crate::url_model::has_authority;

/// [`Transport`] backed by a fresh `curl::easy::Easy` handle per request.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    config: FetchConfig,
}

impl CurlTransport {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    fn configure(&self, easy: &mut curl::easy::Easy, url: &str) -> Result<(), curl::Error> {
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(self.config.follow_redirects)?;
        if self.config.follow_redirects {
            easy.max_redirections(self.config.max_redirections)?;
        }
        easy.connect_timeout(self.config.connect_timeout())?;
        if let Some(timeout) = self.config.timeout() {
            easy.timeout(timeout)?;
        }
        if let Some(agent) = &self.config.user_agent {
            easy.useragent(agent)?;
        }
        Ok(())
    }
}

/// Rejects sources libcurl would otherwise guess a scheme for (`www.example.com`).
fn check_source(url: &str) -> Result<url::Url, DownloadError> {
    let parsed = url::Url::parse(url).map_err(|e| DownloadError::UnsupportedUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" if has_authority(url.trim(), parsed.scheme()) => Ok(parsed),
        "http" | "https" => Err(DownloadError::UnsupportedUrl {
            url: url.to_string(),
            reason: "no host in request URL".to_string(),
        }),
        other => Err(DownloadError::UnsupportedUrl {
            url: url.to_string(),
            reason: format!("unsupported protocol scheme {:?}", other),
        }),
    }
}

/// Decides whether a failed transfer got far enough to count as a body read failure.
///
/// Connect and resolve failures never happen mid-body; they come from the
/// first request or a redirect target after the redirect's headers were seen.
/// A timeout counts as a body failure only once body bytes arrived.
fn is_body_failure(e: &curl::Error, headers_done: bool, body_started: bool) -> bool {
    if e.is_couldnt_connect() || e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return false;
    }
    if e.is_operation_timedout() {
        return body_started;
    }
    headers_done
}

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, DownloadError> {
        let parsed = check_source(url)?;
        let transport_err = |source: curl::Error| DownloadError::Transport {
            url: url.to_string(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        self.configure(&mut easy, parsed.as_str())
            .map_err(transport_err)?;

        let mut body: Vec<u8> = Vec::new();
        // True once the header block of the current response is complete;
        // reset by each new status line so redirects start over.
        let mut headers_done = false;

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|line| {
                    if line.starts_with(b"HTTP/") {
                        headers_done = false;
                    } else if line == b"\r\n" || line == b"\n" {
                        headers_done = true;
                    }
                    true
                })
                .map_err(transport_err)?;
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport_err)?;
            transfer.perform()
        };

        if let Err(e) = performed {
            return Err(if is_body_failure(&e, headers_done, !body.is_empty()) {
                DownloadError::BodyRead {
                    url: url.to_string(),
                    source: e,
                }
            } else {
                transport_err(e)
            });
        }

        let status = easy.response_code().map_err(transport_err)?;
        tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}
