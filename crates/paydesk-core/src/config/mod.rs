//! Client configuration.
//!
//! Resolves the backend API base URL from, in order: an explicit override,
//! the `PAYDESK_API_URL` environment variable, the JSON config file in the
//! user config directory, and finally the built-in default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "PAYDESK_API_URL";

/// Base URL used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

const CONFIG_DIR_NAME: &str = "paydesk";
const CONFIG_FILE_NAME: &str = "config.json";

/// Resolved client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl ClientConfig {
    /// Resolve configuration from the process environment and config file.
    pub fn resolve(override_url: Option<String>) -> Result<Self> {
        let env_url = std::env::var(API_URL_ENV).ok();
        Self::resolve_with(override_url, env_url, default_config_path().as_deref())
    }

    /// Resolve configuration from explicit sources.
    pub fn resolve_with(
        override_url: Option<String>,
        env_url: Option<String>,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(url) = normalize_text_option(override_url) {
            tracing::debug!("Using API base URL from override");
            return Self::with_base_url(&url);
        }

        if let Some(url) = normalize_text_option(env_url) {
            tracing::debug!("Using API base URL from {API_URL_ENV}");
            return Self::with_base_url(&url);
        }

        if let Some(path) = config_path {
            if let Some(config) = Self::load_from_path(path)? {
                tracing::debug!("Using API base URL from {}", path.display());
                return Self::with_base_url(&config.api_base_url);
            }
        }

        Ok(Self::default())
    }

    /// Load a config file, returning `Ok(None)` when it does not exist.
    pub fn load_from_path(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to parse config at {}: {error}",
                path.display()
            ))
        })?;
        Ok(Some(config))
    }

    fn with_base_url(raw: &str) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(raw)?,
        })
    }
}

/// Location of the JSON config file, when a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Trim a base URL, drop trailing slashes, and require an HTTP scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !is_http_url(&base) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}
