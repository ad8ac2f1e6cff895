//! Authorization header values.
//!
//! The client only injects headers; it runs no authentication flows.

pub mod basic;
pub mod bearer;

/// Name of the header every helper here targets.
pub const AUTHORIZATION: &str = "Authorization";

pub use basic::basic_auth;
pub use bearer::{bearer_token, scheme_token, DEFAULT_SCHEME};
