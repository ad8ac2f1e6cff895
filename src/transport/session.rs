//! Persistent HTTP session backed by `reqwest`'s blocking client.
//!
//! The underlying `reqwest::blocking::Client` is built lazily on the first
//! request. Building it can fail (an unusable proxy, a TLS backend that will
//! not initialise), and deferring it means such failures reach the caller as
//! the error of the request that triggered them.

use crate::models::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, TransportError};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::time::Instant;

/// Connection-level settings for a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Whether 3xx responses are followed automatically.
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow when `follow_redirects` is set.
    pub max_redirects: u32,

    /// Whether TLS certificates are validated.
    pub validate_ssl: bool,

    /// Proxy URL applied to every request, if any.
    pub proxy: Option<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            max_redirects: 10,
            validate_ssl: true,
            proxy: None,
        }
    }
}

/// A reusable connection session.
///
/// Requests issued through one session share its connection pool.
#[derive(Debug, Default)]
pub struct Session {
    settings: SessionSettings,
    inner: OnceCell<reqwest::blocking::Client>,
}

impl Session {
    /// Creates a session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given connection settings.
    pub fn with_settings(settings: SessionSettings) -> Self {
        Self {
            settings,
            inner: OnceCell::new(),
        }
    }

    /// Returns the session's connection settings.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    fn client(&self) -> Result<&reqwest::blocking::Client, TransportError> {
        self.inner
            .get_or_try_init(|| build_client(&self.settings))
    }
}

impl Transport for Session {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = validate_url(&request.url)?;
        let client = self.client()?;

        let method = match request.method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
        };

        let mut builder = client.request(method, url).timeout(request.timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // reqwest would send a JSON body under a form Content-Type if both
        // were applied, so only one of them goes out.
        match (&request.json, &request.form) {
            (Some(json), form) => {
                if form.is_some() {
                    log::debug!(
                        "{} {}: both form and JSON bodies given, sending JSON",
                        request.method,
                        request.url
                    );
                }
                builder = builder.json(json);
            }
            (None, Some(form)) => {
                builder = builder.form(form);
            }
            (None, None) => {}
        }

        let start = Instant::now();
        let response = builder.send()?;

        let status_code = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();
        let final_url = response.url().to_string();

        let headers = collect_headers(response.headers());

        let body = response.bytes()?.to_vec();

        let mut http_response = HttpResponse::new(status_code, status_text);
        http_response.url = final_url;
        http_response.headers = headers;
        http_response.set_body(body);
        http_response.duration = start.elapsed();

        Ok(http_response)
    }
}

/// Flattens a response header map into one entry per name.
///
/// Repeated headers are joined with `", "` in the order received. Values that
/// are not valid UTF-8 are decoded lossily.
fn collect_headers(header_map: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut headers: HashMap<String, String> = HashMap::new();
    for (name, value) in header_map {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.clone());
    }
    headers
}

fn build_client(settings: &SessionSettings) -> Result<reqwest::blocking::Client, TransportError> {
    let redirect = if settings.follow_redirects {
        reqwest::redirect::Policy::limited(settings.max_redirects as usize)
    } else {
        reqwest::redirect::Policy::none()
    };

    let mut builder = reqwest::blocking::Client::builder()
        .redirect(redirect)
        .danger_accept_invalid_certs(!settings.validate_ssl);

    if let Some(proxy) = &settings.proxy {
        let proxy = reqwest::Proxy::all(proxy.as_str())
            .map_err(|e| TransportError::BuildError(format!("invalid proxy {}: {}", proxy, e)))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| TransportError::BuildError(e.to_string()))
}

/// Validates that the URL is absolute and uses HTTP or HTTPS.
fn validate_url(url: &str) -> Result<url::Url, TransportError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(TransportError::UnsupportedProtocol(format!(
            "Only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(parsed)
}
