//! The request client.
//!
//! A [`Client`] holds a base URL, a timeout and a set of default headers, and
//! dispatches GET, POST and PUT requests through its [`Transport`]. Relative
//! paths are joined to the base URL; absolute `http(s)://` URLs bypass it.
//!
//! Default headers belong to the client that owns them. Mutators take
//! `&mut self`, so sharing one client between threads that change its headers
//! needs a `Mutex` around the client.

pub mod error;
pub mod url;

pub use error::ClientError;

use crate::auth::{self, AUTHORIZATION};
use crate::config::{ClientConfig, ConfigError};
use crate::models::request::{find_header, insert_header};
use crate::models::{merge_headers, HttpMethod, HttpRequest, HttpResponse, RequestOptions};
use crate::transport::{Session, Transport};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("request-client/", env!("CARGO_PKG_VERSION"));

/// HTTP client with a base URL, a timeout and default headers.
///
/// # Examples
///
/// ```no_run
/// use request_client::{Client, RequestOptions};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = Client::new("https://api.example.com", 10);
/// client.set_auth("my-token-123");
///
/// let response = client.get("/users", RequestOptions::new().query("page", "1"))?;
/// println!("Status: {}", response.status_code);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<T: Transport = Session> {
    base_url: String,
    timeout: Duration,
    headers: HashMap<String, String>,
    transport: T,
}

impl Client<Session> {
    /// Creates a client backed by a new [`Session`].
    ///
    /// Trailing slashes are stripped from `base_url`. A `timeout_secs` of 0
    /// is replaced by [`DEFAULT_TIMEOUT_SECS`] with a logged warning, so
    /// requests never fail for that reason.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self::with_transport(base_url, timeout_secs, Session::new())
    }

    /// Creates a client from a validated [`ClientConfig`].
    pub fn from_config(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let session = Session::with_settings(config.session_settings());
        let mut client = Self::with_transport(config.base_url, config.timeout, session);
        client.set_header("User-Agent", config.user_agent);
        for (name, value) in config.default_headers {
            client.set_header(name, value);
        }

        Ok(client)
    }
}

impl Default for Client<Session> {
    fn default() -> Self {
        Self::new("", DEFAULT_TIMEOUT_SECS)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    ///
    /// A `timeout_secs` of 0 is not an error: it is replaced by
    /// [`DEFAULT_TIMEOUT_SECS`] and a warning is logged. Use
    /// [`Client::from_config`] to have a zero timeout rejected instead.
    pub fn with_transport(base_url: impl Into<String>, timeout_secs: u64, transport: T) -> Self {
        let timeout_secs = if timeout_secs == 0 {
            log::warn!(
                "timeout must be greater than 0, using {}s",
                DEFAULT_TIMEOUT_SECS
            );
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_secs
        };

        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: url::normalize_base_url(&base_url.into()),
            timeout: Duration::from_secs(timeout_secs),
            headers,
            transport,
        }
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The timeout applied to requests that do not set their own.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The default headers sent with every request.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Looks up a default header, ignoring ASCII case of the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves `path` against the base URL.
    ///
    /// See [`url::resolve_url`] for the rules.
    pub fn resolve(&self, path: &str) -> String {
        url::resolve_url(&self.base_url, path)
    }

    /// Sends a GET request.
    ///
    /// Any response, whatever its status, is returned as `Ok`. A transport
    /// failure becomes [`ClientError::Get`].
    pub fn get(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, ClientError> {
        self.dispatch(HttpMethod::GET, path, None, None, options)
    }

    /// Sends a POST request with an optional form or JSON body.
    ///
    /// Both bodies are handed to the transport when both are given. A
    /// transport failure becomes [`ClientError::Post`].
    pub fn post(
        &self,
        path: &str,
        form: Option<&[(&str, &str)]>,
        json: Option<&Value>,
        options: RequestOptions,
    ) -> Result<HttpResponse, ClientError> {
        self.dispatch(HttpMethod::POST, path, form, json, options)
    }

    /// Sends a PUT request with an optional form or JSON body.
    ///
    /// A transport failure becomes [`ClientError::Put`].
    pub fn put(
        &self,
        path: &str,
        form: Option<&[(&str, &str)]>,
        json: Option<&Value>,
        options: RequestOptions,
    ) -> Result<HttpResponse, ClientError> {
        self.dispatch(HttpMethod::PUT, path, form, json, options)
    }

    /// Sets a default header, replacing any header of the same name.
    ///
    /// The value is not validated here; an unusable name or value fails the
    /// next request instead.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        insert_header(&mut self.headers, key.into(), value.into());
    }

    /// Removes a default header, returning its value if it was set.
    pub fn remove_header(&mut self, key: &str) -> Option<String> {
        let name = self
            .headers
            .keys()
            .find(|k| k.eq_ignore_ascii_case(key))
            .cloned()?;
        self.headers.remove(&name)
    }

    /// Sets `Authorization: Bearer <token>`.
    pub fn set_auth(&mut self, token: &str) {
        self.set_header(AUTHORIZATION, auth::bearer_token(token));
    }

    /// Sets `Authorization: <scheme> <token>`.
    pub fn set_auth_with_scheme(&mut self, token: &str, scheme: &str) {
        self.set_header(AUTHORIZATION, auth::scheme_token(scheme, token));
    }

    /// Sets `Authorization` to HTTP Basic credentials.
    pub fn set_basic_auth(&mut self, username: &str, password: &str) {
        self.set_header(AUTHORIZATION, auth::basic_auth(username, password));
    }

    fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        form: Option<&[(&str, &str)]>,
        json: Option<&Value>,
        options: RequestOptions,
    ) -> Result<HttpResponse, ClientError> {
        let request = self.build_request(method, path, form, json, options);
        log::debug!("{} {}", method, request.url);

        let url = request.url.clone();
        self.transport.execute(request).map_err(|cause| {
            log::warn!("{} {} failed: {}", method, url, cause);
            ClientError::wrap(method, cause)
        })
    }

    fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        form: Option<&[(&str, &str)]>,
        json: Option<&Value>,
        options: RequestOptions,
    ) -> HttpRequest {
        let timeout = options.timeout.unwrap_or(self.timeout);
        let mut request = HttpRequest::new(method, self.resolve(path), timeout);
        request.headers = merge_headers(&self.headers, &options.headers);
        request.query = options.query;
        request.form = form.map(|fields| {
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        });
        request.json = json.cloned();
        request
    }
}
