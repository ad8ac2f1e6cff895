//! Configuration schema for the request client.
//!
//! This module defines the configuration structure and validation logic for
//! every user-configurable client setting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::transport::SessionSettings;

/// Main configuration structure for a [`Client`](crate::Client).
///
/// Missing settings fall back to defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Prefix prepended to relative request paths. Empty means "no base".
    #[serde(default)]
    pub base_url: String,

    /// Request timeout in seconds.
    ///
    /// Must be greater than 0. Defaults to 30.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Value of the default `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to automatically follow HTTP redirects. Defaults to true.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow. Defaults to 10.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Whether to validate SSL/TLS certificates. Defaults to true.
    ///
    /// **Warning:** Disabling SSL validation can expose you to security risks.
    #[serde(default = "default_validate_ssl")]
    pub validate_ssl: bool,

    /// Proxy URL for all requests.
    #[serde(default)]
    pub proxy: Option<String>,

    /// Extra default headers, applied on top of `User-Agent` and `Accept`.
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            follow_redirects: default_follow_redirects(),
            max_redirects: default_max_redirects(),
            validate_ssl: default_validate_ssl(),
            proxy: None,
            default_headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive message.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }

        if let Some(proxy) = &self.proxy {
            url::Url::parse(proxy).map_err(|e| format!("proxy is not a valid URL: {}", e))?;
        }

        // max_redirects can be 0 (no redirects), so no validation needed

        Ok(())
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout)
    }

    /// Connection settings for the session this configuration describes.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            follow_redirects: self.follow_redirects,
            max_redirects: self.max_redirects,
            validate_ssl: self.validate_ssl,
            proxy: self.proxy.clone(),
        }
    }
}

fn default_timeout() -> u64 {
    crate::client::DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    crate::client::DEFAULT_USER_AGENT.to_string()
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirects() -> u32 {
    10
}

fn default_validate_ssl() -> bool {
    true
}
