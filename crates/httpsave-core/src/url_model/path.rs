//! Filename extraction from a raw source string.

/// Filename used when the source has no usable trailing segment.
pub const DEFAULT_FILENAME: &str = "download.bin";

/// Returns the last `/`-separated segment of `source`, ignoring trailing slashes.
///
/// The source is treated as a plain path, not parsed as a URL: a query string or
/// fragment stays part of the name (`http://h/a.zip?x=1` → `a.zip?x=1`).
/// Falls back to [`DEFAULT_FILENAME`] for empty, `.` or `..` segments.
pub fn base_name(source: &str) -> &str {
    let trimmed = source.trim_end_matches('/');
    let segment = match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    };
    if segment.is_empty() || segment == "." || segment == ".." {
        DEFAULT_FILENAME
    } else {
        segment
    }
}
