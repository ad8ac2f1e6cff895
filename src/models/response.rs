//! HTTP response data models.
//!
//! This module defines the response handed back to callers: status
//! information, headers, the raw body and a few convenience accessors.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use super::request::find_header;

/// Represents an HTTP response received from a server.
///
/// Any status code is a valid response; the client never turns a 4xx or 5xx
/// into an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// HTTP status text (e.g., "OK", "Not Found").
    pub status_text: String,

    /// Final URL of the response, after any redirects were followed.
    pub url: String,

    /// Response headers as key-value pairs.
    pub headers: HashMap<String, String>,

    /// Response body as raw bytes.
    ///
    /// Kept as bytes so binary payloads survive; see [`HttpResponse::text`]
    /// and [`HttpResponse::json`] for decoded views.
    pub body: Vec<u8>,

    /// Time from sending the request to reading the full body.
    pub duration: Duration,

    /// Total response size in bytes, headers included.
    pub size: usize,
}

impl HttpResponse {
    /// Creates a new HttpResponse with the given status code and text.
    ///
    /// # Arguments
    ///
    /// * `status_code` - HTTP status code
    /// * `status_text` - HTTP status text description
    ///
    /// # Returns
    ///
    /// A new `HttpResponse` with an empty body and no headers.
    pub fn new(status_code: u16, status_text: String) -> Self {
        Self {
            status_code,
            status_text,
            url: String::new(),
            headers: HashMap::new(),
            body: Vec::new(),
            duration: Duration::from_secs(0),
            size: 0,
        }
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Checks if the response status indicates a redirection (3xx).
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    /// Checks if the response status indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Checks if the response status indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Looks up a response header, ignoring ASCII case of the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Gets the Content-Type header value if present.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Decodes the body as UTF-8 text.
    ///
    /// # Returns
    ///
    /// `Ok(String)` if the body is valid UTF-8, `Err` otherwise.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    /// Deserializes the body as JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_client::models::HttpResponse;
    /// use serde_json::Value;
    ///
    /// let mut response = HttpResponse::new(200, "OK".to_string());
    /// response.set_body(br#"{"id": 1}"#.to_vec());
    ///
    /// let value: Value = response.json().unwrap();
    /// assert_eq!(value["id"], 1);
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Adds a header to the response and recomputes the size.
    pub fn add_header(&mut self, name: String, value: String) {
        self.headers.insert(name, value);
        self.size = self.calculate_headers_size() + self.body.len();
    }

    /// Sets the response body and recomputes the size.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.size = self.calculate_headers_size() + body.len();
        self.body = body;
    }

    fn calculate_headers_size(&self) -> usize {
        self.headers
            .iter()
            .map(|(k, v)| k.len() + v.len() + 4) // ": " and "\r\n"
            .sum()
    }
}
