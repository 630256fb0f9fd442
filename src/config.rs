// src/config.rs

//! Application configuration structures.
//!
//! Loaded from a TOML file; every section and field falls back to a default
//! so a partial (or missing) file still yields a usable configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable overriding `api.base_url`.
pub const ENV_API_URL: &str = "CMS_ADMIN_API_URL";
/// Environment variable overriding `api.image_base_url`.
pub const ENV_IMAGE_URL: &str = "CMS_ADMIN_IMAGE_URL";
/// Environment variable overriding `auth.token`.
pub const ENV_TOKEN: &str = "CMS_ADMIN_TOKEN";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// List page behavior
    #[serde(default)]
    pub list: ListConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply environment overrides on top of file values.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(url) = lookup(ENV_IMAGE_URL).filter(|v| !v.trim().is_empty()) {
            self.api.image_base_url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.trim().is_empty()) {
            self.auth.token = Some(token);
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        url::Url::parse(&self.api.base_url)?;
        if !self.api.image_base_url.is_empty() {
            url::Url::parse(&self.api.image_base_url)?;
        }
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == Some(0) {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if !self.auth.login_path.starts_with('/') {
            return Err(AppError::validation("auth.login_path must start with '/'"));
        }
        if self.list.page_limit == 0 {
            return Err(AppError::validation("list.page_limit must be > 0"));
        }
        Ok(())
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every resource path is joined onto
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Prefix for relative image paths returned by the API
    #[serde(default = "defaults::image_base_url")]
    pub image_base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; unset means requests may wait forever
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            image_base_url: defaults::image_base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Authentication settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path of the login endpoint
    #[serde(default = "defaults::login_path")]
    pub login_path: String,

    /// Pre-issued bearer token
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: defaults::login_path(),
            token: None,
        }
    }
}

/// List page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Page size sent as `limit`
    #[serde(default = "defaults::page_limit")]
    pub page_limit: u32,

    /// Quiet period before a search term is sent
    #[serde(default = "defaults::search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_limit: defaults::page_limit(),
            search_debounce_ms: defaults::search_debounce_ms(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when RUST_LOG is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "http://localhost:5000/api".into()
    }
    pub fn image_base_url() -> String {
        "http://localhost:5000".into()
    }
    pub fn user_agent() -> String {
        concat!("cms-admin/", env!("CARGO_PKG_VERSION")).into()
    }

    // Auth defaults
    pub fn login_path() -> String {
        "/auth/login".into()
    }

    // List defaults
    pub fn page_limit() -> u32 {
        10
    }
    pub fn search_debounce_ms() -> u64 {
        500
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
