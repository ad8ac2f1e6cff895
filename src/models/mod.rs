//! Data models for HTTP requests and responses.
//!
//! This module contains the data structures shared by the client and its
//! transports.

pub mod request;
pub mod response;

pub use request::{merge_headers, HttpMethod, HttpRequest, RequestOptions};
pub use response::HttpResponse;
