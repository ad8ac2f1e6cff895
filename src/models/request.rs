//! HTTP request data models.
//!
//! This module defines the request-side data structures: the verbs the client
//! dispatches, the per-call options a caller may supply, and the fully
//! resolved request handed to a transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// HTTP request method.
///
/// Only the verbs the client dispatches are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options a caller may attach to a single request.
///
/// Nothing here is interpreted by the client beyond header merging and the
/// timeout fallback; everything else is passed to the transport verbatim.
///
/// Redirect following and proxying are not per-call options: reqwest fixes
/// both when its client is built, so they live in
/// [`SessionSettings`](crate::transport::SessionSettings) and apply to every
/// request of a session.
///
/// # Examples
///
/// ```
/// use request_client::models::RequestOptions;
/// use std::time::Duration;
///
/// let options = RequestOptions::new()
///     .query("page", "1")
///     .header("X-Custom", "value")
///     .timeout(Duration::from_secs(5));
///
/// assert_eq!(options.query.len(), 1);
/// assert_eq!(options.timeout, Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Query string parameters, appended in order.
    pub query: Vec<(String, String)>,

    /// Extra headers for this call only.
    ///
    /// Merged over the client's default headers; a name that matches a
    /// default (case-insensitively) replaces it for this request.
    pub headers: HashMap<String, String>,

    /// Timeout override for this call.
    ///
    /// When `None` the client's configured timeout is used.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds an extra header for this call.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Overrides the client timeout for this call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A fully resolved request, ready for a transport.
///
/// Built by the client from the resolved URL, merged headers and the
/// effective timeout. Form and JSON bodies are carried side by side; when
/// both are present the transport decides which one is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,

    /// Absolute target URL (or the caller's path unchanged when no base URL
    /// is configured).
    pub url: String,

    /// Default headers merged with per-call headers.
    pub headers: HashMap<String, String>,

    /// Query string parameters.
    pub query: Vec<(String, String)>,

    /// Form-encoded body fields.
    pub form: Option<Vec<(String, String)>>,

    /// JSON body.
    pub json: Option<Value>,

    /// Effective timeout for the whole exchange.
    pub timeout: Duration,
}

impl HttpRequest {
    /// Creates a new HttpRequest with no headers, query or body.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `url` - Target URL
    /// * `timeout` - Timeout for the exchange
    pub fn new(method: HttpMethod, url: String, timeout: Duration) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            query: Vec::new(),
            form: None,
            json: None,
            timeout,
        }
    }

    /// Looks up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Finds a header value in a map, ignoring ASCII case of the name.
pub(crate) fn find_header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Inserts a header, replacing any existing entry whose name differs only in
/// ASCII case.
pub(crate) fn insert_header(headers: &mut HashMap<String, String>, name: String, value: String) {
    headers.retain(|k, _| !k.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}

/// Returns `defaults` overlaid with `extra`.
///
/// Names are compared case-insensitively, and `extra` wins on conflict.
pub fn merge_headers(
    defaults: &HashMap<String, String>,
    extra: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = defaults.clone();
    for (name, value) in extra {
        insert_header(&mut merged, name.clone(), value.clone());
    }
    merged
}
