//! Client configuration for the battleships console.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Name of the optional configuration file looked up in the working
/// directory.
const CONFIG_FILE: &str = "battleships.toml";

/// Connection settings for the remote game service.
///
/// Constructed once at startup and handed to the REST client; no
/// component reads ambient process state after that.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the battleships API, without the version segment.
    #[serde(default = "default_base_url")]
    base_url: String,

    /// API version segment inserted into every request path.
    #[serde(default = "default_api_version")]
    api_version: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/battleships/api".to_string()
}

fn default_api_version() -> String {
    "1.0".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(base_url = %config.base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration: defaults, then
    /// `battleships.toml` in the working directory if present, then the
    /// `BATTLESHIPS_API_URL` / `BATTLESHIPS_API_VERSION` environment
    /// overrides.
    #[instrument]
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Path::new(CONFIG_FILE).exists() {
            true => Some(Self::from_file(CONFIG_FILE)?),
            false => None,
        };
        Ok(Self::resolve(
            file,
            std::env::var("BATTLESHIPS_API_URL").ok(),
            std::env::var("BATTLESHIPS_API_VERSION").ok(),
        ))
    }

    /// Layers the file configuration and environment overrides over the
    /// defaults.
    fn resolve(file: Option<Self>, url: Option<String>, version: Option<String>) -> Self {
        let mut config = file.unwrap_or_default();
        if let Some(url) = url {
            debug!(base_url = %url, "Applying base URL override");
            config.base_url = url;
        }
        if let Some(version) = version {
            debug!(api_version = %version, "Applying API version override");
            config.api_version = version;
        }
        config
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
