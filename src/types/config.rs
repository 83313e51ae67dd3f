//! Configuration structures.
//!
//! Configuration is loaded from an optional JSON file, then overridden by
//! `VOLUNTEER_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::errors::{Error, Result};

/// Global client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Events API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Session cookie configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Events API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API (no trailing `/api`).
    pub base_url: String,

    /// Per-request timeout.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Session cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the httpOnly cookie the API sets on login.
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "session".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Read a JSON config file. Missing sections fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// File (when given) layered under environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Config::from_file(p)?,
            None => Config::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `VOLUNTEER_*` overrides from a variable lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("VOLUNTEER_API_URL").filter(|v| !v.is_empty()) {
            self.api.base_url = url;
        }
        if let Some(name) = lookup("VOLUNTEER_SESSION_COOKIE").filter(|v| !v.is_empty()) {
            self.session.cookie_name = name;
        }
        if let Some(level) = lookup("VOLUNTEER_LOG_LEVEL").filter(|v| !v.is_empty()) {
            self.observability.log_level = level;
        }
        if let Some(format) = lookup("VOLUNTEER_LOG_FORMAT") {
            self.observability.json_logs = format.eq_ignore_ascii_case("json");
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::config("api.base_url cannot be empty"));
        }
        if self.session.cookie_name.trim().is_empty() {
            return Err(Error::config("session.cookie_name cannot be empty"));
        }
        Ok(())
    }
}
