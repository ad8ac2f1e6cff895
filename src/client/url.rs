//! Base URL handling.

/// Strips every trailing `/` from a base URL.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Returns true when `path` already names an absolute HTTP(S) URL.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Resolves `path` against a normalized base URL.
///
/// A relative path is joined to the base with exactly one `/`. An absolute
/// `http://` or `https://` path, or any path when the base is empty, is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use request_client::client::url::resolve_url;
///
/// assert_eq!(resolve_url("https://api.example.com", "/users"), "https://api.example.com/users");
/// assert_eq!(resolve_url("https://api.example.com", "https://other.com/data"), "https://other.com/data");
/// assert_eq!(resolve_url("", "/users"), "/users");
/// ```
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if !base_url.is_empty() && !is_absolute(path) {
        format!("{}/{}", base_url, path.trim_start_matches('/'))
    } else {
        path.to_string()
    }
}
