//! URL validation and filename extraction from a download source.

mod path;

pub use path::{base_name, DEFAULT_FILENAME};

/// Reports whether `candidate` is an absolute URL with both a scheme and a host.
///
/// Surrounding whitespace is ignored. Anything that fails to parse, or parses
/// without a host (`mailto:x`, `scheme:`), is simply not a valid URL; parse
/// errors never reach the caller.
///
/// # Examples
///
/// - `is_valid_url("https://localhost:8080")` → `true`
/// - `is_valid_url("www.example.com")` → `false` (no scheme)
pub fn is_valid_url(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }
    match url::Url::parse(trimmed) {
        Ok(parsed) => {
            !parsed.scheme().is_empty()
                && has_authority(trimmed, parsed.scheme())
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// True if `://` follows the scheme directly in `raw`.
///
/// The URL parser builds a host for `http:host` or `http:/host` too; those
/// carry no authority and do not count as having a host.
pub(crate) fn has_authority(raw: &str, scheme: &str) -> bool {
    raw.get(scheme.len()..)
        .is_some_and(|rest| rest.starts_with("://"))
}
