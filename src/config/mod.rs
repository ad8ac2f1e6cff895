//! Configuration loading for the request client.
//!
//! Settings live under the `"request-client"` key of a JSON document and are
//! merged over [`ClientConfig::default`]. A document that fails to parse
//! falls back to defaults with a logged warning; a document that parses but
//! fails validation is an error.

pub mod schema;

pub use schema::ClientConfig;

use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Key under which client settings are read.
pub const SETTINGS_KEY: &str = "request-client";

/// Errors raised while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The settings file could not be read.
    Io(std::io::Error),

    /// The settings file is not valid JSON.
    Parse(serde_json::Error),

    /// The settings parsed but contain an invalid value.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Failed to read configuration: {}", err),
            ConfigError::Parse(err) => write!(f, "Failed to parse configuration: {}", err),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Loads configuration from a JSON settings value.
///
/// # Arguments
///
/// * `settings_json` - Optional JSON value holding settings under
///   `"request-client"`
///
/// # Example
///
/// ```
/// use request_client::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "request-client": {
///         "baseUrl": "https://api.example.com",
///         "timeout": 60
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.timeout, 60);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::default();

    if let Some(settings) = settings_json {
        if let Some(client_settings) = settings.get(SETTINGS_KEY) {
            match serde_json::from_value::<ClientConfig>(client_settings.clone()) {
                Ok(user_config) => config = user_config,
                Err(e) => {
                    log::warn!(
                        "Failed to parse {} settings: {}. Using defaults.",
                        SETTINGS_KEY,
                        e
                    );
                }
            }
        }
    }

    config.validate().map_err(ConfigError::Invalid)?;

    Ok(config)
}

/// Loads configuration from a JSON file on disk.
///
/// The file has the same shape as the value accepted by [`load_config`].
pub fn load_config_file(path: impl AsRef<Path>) -> Result<ClientConfig, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let settings: Value = serde_json::from_str(&contents)?;
    load_config(Some(settings))
}
