//! Transport error types.
//!
//! This module defines the failures a transport can raise while executing a
//! request: network errors, timeouts, malformed URLs and protocol issues.
//! The client wraps each of them in a per-verb error without discarding it.

use std::fmt;

/// Errors that can occur while a transport executes a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Network error occurred during request execution.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other network-level issues.
    NetworkError(String),

    /// Request timed out before completion.
    Timeout(String),

    /// Invalid URL provided in the request.
    ///
    /// The URL could not be parsed, typically because it is relative and no
    /// base URL was configured.
    InvalidUrl(String),

    /// TLS/SSL error occurred during HTTPS connection.
    TlsError(String),

    /// HTTP protocol error, such as a malformed response.
    ProtocolError(String),

    /// Request building error.
    ///
    /// Invalid header names or values, an unusable proxy, or a client that
    /// could not be constructed.
    BuildError(String),

    /// Unsupported protocol.
    ///
    /// Only HTTP and HTTPS are supported.
    UnsupportedProtocol(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            TransportError::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            TransportError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            TransportError::TlsError(msg) => write!(f, "TLS/SSL error: {}", msg),
            TransportError::ProtocolError(msg) => write!(f, "HTTP protocol error: {}", msg),
            TransportError::BuildError(msg) => write!(f, "Request build error: {}", msg),
            TransportError::UnsupportedProtocol(protocol) => {
                write!(f, "Unsupported protocol: {}", protocol)
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// Convert reqwest errors to TransportError.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = describe(&err);
        if err.is_timeout() {
            TransportError::Timeout(message)
        } else if err.is_builder() {
            TransportError::BuildError(message)
        } else if message.contains("certificate")
            || message.contains("TLS")
            || message.contains("SSL")
        {
            TransportError::TlsError(message)
        } else if err.is_connect() || err.is_request() {
            TransportError::NetworkError(message)
        } else if err.is_decode() || err.is_body() {
            TransportError::ProtocolError(message)
        } else {
            TransportError::NetworkError(message)
        }
    }
}

/// Convert URL parsing errors to TransportError.
impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidUrl(err.to_string())
    }
}

/// Renders an error together with its source chain.
///
/// reqwest keeps the interesting part ("Connection refused", "invalid
/// certificate") in the sources, not in the top-level message.
fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
