//! HTTP transports.
//!
//! A [`Transport`] executes one fully resolved [`HttpRequest`] and hands back
//! the [`HttpResponse`]. The client never talks to the network directly; it
//! builds the request and delegates here, so tests can swap in a double.
//!
//! [`Session`] is the production transport, a persistent `reqwest` blocking
//! client that keeps its connection pool for the lifetime of the owning
//! client.

pub mod error;
pub mod session;

pub use error::TransportError;
pub use session::{Session, SessionSettings};

use crate::models::{HttpRequest, HttpResponse};

/// Executes HTTP requests on behalf of a client.
pub trait Transport {
    /// Sends the request and waits for the complete response.
    ///
    /// A response with any status code is `Ok`; only failures to obtain a
    /// response are errors.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}
