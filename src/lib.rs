//! A small blocking HTTP client.
//!
//! [`Client`] keeps a persistent session, a base URL, a timeout and a set of
//! default headers. Its `get`, `post` and `put` methods join relative paths to
//! the base URL, merge per-call options over the defaults, and hand the
//! request to a [`Transport`]. Any failure to obtain a response is reported as
//! the error of the verb that hit it ([`ClientError::Get`], [`ClientError::Post`]
//! or [`ClientError::Put`]) with the transport error kept as its source. HTTP
//! error statuses are ordinary responses.
//!
//! # Architecture
//!
//! - **client**: the [`Client`], URL resolution and the per-verb errors
//! - **models**: requests, per-call options and responses
//! - **transport**: the [`Transport`] trait and the `reqwest`-backed [`Session`]
//! - **auth**: `Authorization` header values
//! - **config**: serde-backed [`ClientConfig`] and its loaders
//!
//! The free functions [`get`], [`post`] and [`put`] build a default client
//! for a single call.
//!
//! # Usage
//!
//! ```no_run
//! use request_client::{Client, RequestOptions};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = Client::new("https://jsonplaceholder.typicode.com", 30);
//! client.set_header("X-API-Key", "secret");
//!
//! let user = client.get("/users/1", RequestOptions::new())?;
//! assert!(user.is_success());
//!
//! let post = json!({"title": "hello", "userId": 1});
//! let created = client.post("/posts", None, Some(&post), RequestOptions::new())?;
//! println!("{}", created.status_code);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod models;
pub mod standalone;
pub mod transport;

pub use client::{Client, ClientError};
pub use config::{ClientConfig, ConfigError};
pub use models::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use standalone::{get, post, put, with_client};
pub use transport::{Session, SessionSettings, Transport, TransportError};
