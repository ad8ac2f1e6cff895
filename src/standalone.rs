//! One-off requests.
//!
//! Each function builds a default [`Client`], performs a single request and
//! drops the client before returning, whether the request succeeded or not.

use crate::client::{Client, ClientError};
use crate::models::{HttpResponse, RequestOptions};
use serde_json::Value;

/// Runs `f` with a freshly built default client.
///
/// The client, and its connection pool, is released when `f` returns or
/// unwinds.
pub fn with_client<F, R>(f: F) -> R
where
    F: FnOnce(&Client) -> R,
{
    let client: Client = Client::default();
    f(&client)
}

/// Sends a one-off GET request.
///
/// `url` should be absolute; the temporary client has no base URL.
///
/// # Examples
///
/// ```no_run
/// use request_client::RequestOptions;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let response = request_client::get("https://api.example.com/users", RequestOptions::new())?;
/// println!("Status: {}", response.status_code);
/// # Ok(())
/// # }
/// ```
pub fn get(url: &str, options: RequestOptions) -> Result<HttpResponse, ClientError> {
    with_client(|client| client.get(url, options))
}

/// Sends a one-off POST request.
pub fn post(
    url: &str,
    form: Option<&[(&str, &str)]>,
    json: Option<&Value>,
    options: RequestOptions,
) -> Result<HttpResponse, ClientError> {
    with_client(|client| client.post(url, form, json, options))
}

/// Sends a one-off PUT request.
pub fn put(
    url: &str,
    form: Option<&[(&str, &str)]>,
    json: Option<&Value>,
    options: RequestOptions,
) -> Result<HttpResponse, ClientError> {
    with_client(|client| client.put(url, form, json, options))
}
