//! Per-verb client errors.
//!
//! Every transport failure is re-raised as the error of the verb that hit it.
//! The transport error is kept intact as the source, so callers can still
//! branch on what actually went wrong.

use crate::models::HttpMethod;
use crate::transport::TransportError;
use std::fmt;

/// A request failed before a response was obtained.
///
/// HTTP error statuses are never reported here; a 404 or 500 is a normal
/// [`HttpResponse`](crate::models::HttpResponse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A GET request failed.
    Get(TransportError),
    /// A POST request failed.
    Post(TransportError),
    /// A PUT request failed.
    Put(TransportError),
}

impl ClientError {
    /// Wraps a transport failure in the error for `method`.
    pub fn wrap(method: HttpMethod, cause: TransportError) -> Self {
        match method {
            HttpMethod::GET => ClientError::Get(cause),
            HttpMethod::POST => ClientError::Post(cause),
            HttpMethod::PUT => ClientError::Put(cause),
        }
    }

    /// The verb whose request failed.
    pub fn method(&self) -> HttpMethod {
        match self {
            ClientError::Get(_) => HttpMethod::GET,
            ClientError::Post(_) => HttpMethod::POST,
            ClientError::Put(_) => HttpMethod::PUT,
        }
    }

    /// The underlying transport failure.
    pub fn cause(&self) -> &TransportError {
        match self {
            ClientError::Get(cause) | ClientError::Post(cause) | ClientError::Put(cause) => cause,
        }
    }

    /// Consumes the error, returning the transport failure.
    pub fn into_cause(self) -> TransportError {
        match self {
            ClientError::Get(cause) | ClientError::Post(cause) | ClientError::Put(cause) => cause,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.method(), self.cause())
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause())
    }
}
