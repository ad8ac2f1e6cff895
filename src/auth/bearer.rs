//! Token authentication header values.
//!
//! Formats `Authorization` values of the form `<scheme> <token>`, with
//! `Bearer` (RFC 6750) as the default scheme.

/// Scheme used when the caller does not name one.
pub const DEFAULT_SCHEME: &str = "Bearer";

/// Formats a token into a Bearer authentication header value.
///
/// # Examples
///
/// ```
/// use request_client::auth::bearer::bearer_token;
///
/// assert_eq!(bearer_token("abc123xyz"), "Bearer abc123xyz");
/// ```
pub fn bearer_token(token: &str) -> String {
    scheme_token(DEFAULT_SCHEME, token)
}

/// Formats a token under an arbitrary scheme.
///
/// Neither part is validated; the value is passed through as written.
///
/// # Examples
///
/// ```
/// use request_client::auth::bearer::scheme_token;
///
/// assert_eq!(scheme_token("Token", "my-token"), "Token my-token");
/// ```
pub fn scheme_token(scheme: &str, token: &str) -> String {
    format!("{} {}", scheme, token)
}
