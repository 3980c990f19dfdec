//
//  github2
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads, saves and edits the `gh2` configuration, a TOML file stored in the
//! platform configuration directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/gh2/config.toml`
//! - **macOS**: `~/Library/Application Support/gh2/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\gh2\config.toml`
//!
//! The `GH2_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! base_url = "https://github.com/api/v2"
//! format = "json"
//! timeout_secs = 30
//!
//! [auth]
//! username = "defunkt"
//! api_token = "0123456789abcdef"
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `GITHUB_USER` | `auth.username` |
//! | `GITHUB_TOKEN` | `auth.api_token` |
//! | `GITHUB_ACCESS_TOKEN` | `auth.access_token` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use github2::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("auth.username", "defunkt".to_string())?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{ResponseFormat, DEFAULT_BASE_URL};
use crate::auth::Credentials;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "GH2_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &[
    "api.base_url",
    "api.format",
    "api.timeout_secs",
    "auth.username",
    "auth.api_token",
    "auth.access_token",
];

/// Global configuration for `gh2`.
///
/// # Examples
///
/// ```rust
/// use github2::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.api.base_url, "https://github.com/api/v2");
/// assert!(!config.credentials().is_authenticated());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Where and how to reach the API.
    #[serde(default)]
    pub api: ApiConfig,

    /// Credentials.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// API endpoint settings.
///
/// | Field | Default |
/// |-------|---------|
/// | `base_url` | `https://github.com/api/v2` |
/// | `format` | `json` |
/// | `timeout_secs` | none |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// API root, without the format segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Response body format.
    #[serde(default)]
    pub format: ResponseFormat,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            format: ResponseFormat::default(),
            timeout_secs: None,
        }
    }
}

/// Stored credentials.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuthConfig {
    /// GitHub login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Legacy API token, sent with `username`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// OAuth access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.to_credentials(), f)
    }
}

impl AuthConfig {
    fn to_credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            access_token: self.access_token.clone(),
            api_token: self.api_token.clone(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location, then applies
    /// environment overrides.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Loads configuration from `path` without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        let config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Path to the configuration file.
    ///
    /// `GH2_CONFIG` wins when set; otherwise `<config dir>/gh2/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration directory can be determined.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Applies `GITHUB_USER`, `GITHUB_TOKEN` and `GITHUB_ACCESS_TOKEN`.
    ///
    /// `lookup` resolves a variable name; empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(user) = get("GITHUB_USER") {
            self.auth.username = Some(user);
        }
        if let Some(token) = get("GITHUB_TOKEN") {
            self.auth.api_token = Some(token);
        }
        if let Some(token) = get("GITHUB_ACCESS_TOKEN") {
            self.auth.access_token = Some(token);
        }
    }

    /// Credentials built from the `[auth]` section.
    pub fn credentials(&self) -> Credentials {
        self.auth.to_credentials()
    }

    /// Gets a value by dotted key, e.g. `api.format`.
    ///
    /// Tokens are returned as stored. Returns `None` for unknown or unset keys.
    ///
    /// ```rust
    /// use github2::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("api.format"), Some("json".to_string()));
    /// assert_eq!(config.get("auth.username"), None);
    /// assert_eq!(config.get("editor"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.base_url" => Some(self.api.base_url.clone()),
            "api.format" => Some(self.api.format.to_string()),
            "api.timeout_secs" => self.api.timeout_secs.map(|t| t.to_string()),
            "auth.username" => self.auth.username.clone(),
            "auth.api_token" => self.auth.api_token.clone(),
            "auth.access_token" => self.auth.access_token.clone(),
            _ => None,
        }
    }

    /// Sets a value by dotted key.
    ///
    /// An empty value clears optional keys.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys and for values that do not parse
    /// (`api.format` must be `json` or `yaml`, `api.timeout_secs` a number).
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        let optional = |value: String| (!value.is_empty()).then_some(value);

        match key {
            "api.base_url" => {
                url::Url::parse(&value)
                    .map_err(|e| anyhow::anyhow!("Invalid base URL '{}': {}", value, e))?;
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            "api.format" => {
                self.api.format = value.parse::<ResponseFormat>().map_err(anyhow::Error::msg)?;
            }
            "api.timeout_secs" => {
                self.api.timeout_secs = match optional(value) {
                    Some(v) => Some(v.parse::<u64>().map_err(|_| anyhow::anyhow!("Invalid timeout '{}'", v))?),
                    None => None,
                };
            }
            "auth.username" => self.auth.username = optional(value),
            "auth.api_token" => self.auth.api_token = optional(value),
            "auth.access_token" => self.auth.access_token = optional(value),
            other => bail!("Unknown config key '{}'. Valid keys: {}", other, KEYS.join(", ")),
        }
        Ok(())
    }
}
