//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (SEARCHER_*)
//! 2. Bare `GOOGLE_API_KEY` / `GOOGLE_CSE_ID` environment variables
//! 3. TOML config file (if SEARCHER_CONFIG_FILE set)
//! 4. Built-in defaults

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (SEARCHER_*)
/// 2. `GOOGLE_API_KEY` and `GOOGLE_CSE_ID`
/// 3. TOML config file (if SEARCHER_CONFIG_FILE set)
/// 4. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Google Custom Search API key.
    ///
    /// Set via SEARCHER_GOOGLE_API_KEY or GOOGLE_API_KEY.
    #[serde(default)]
    pub google_api_key: Option<String>,

    /// Programmable Search Engine identifier (`cx`).
    ///
    /// Set via SEARCHER_GOOGLE_CSE_ID or GOOGLE_CSE_ID.
    #[serde(default)]
    pub google_cse_id: Option<String>,

    /// Path to the SQLite session store.
    ///
    /// Set via SEARCHER_DB_PATH environment variable.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Address the HTTP server listens on.
    ///
    /// Set via SEARCHER_BIND_ADDR environment variable.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// User-Agent string for provider requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Provider request timeout in milliseconds.
    ///
    /// Set via SEARCHER_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Number of results requested per search (1-10).
    #[serde(default = "default_result_count")]
    pub result_count: u8,

    /// Seconds between sweeps of expired session entries.
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./searcher-sessions.sqlite")
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".into()
}

fn default_user_agent() -> String {
    "searcher/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_result_count() -> u8 {
    10
}

fn default_purge_interval_secs() -> u64 {
    300
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_cse_id: None,
            db_path: default_db_path(),
            bind_addr: default_bind_addr(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            result_count: default_result_count(),
            purge_interval_secs: default_purge_interval_secs(),
        }
    }
}

/// Credentials the Google client needs for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleCredentials<'a> {
    pub api_key: &'a str,
    pub cse_id: &'a str,
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Interval of the expired-entry sweep.
    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs)
    }

    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `bind_addr` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            field: "bind_addr".into(),
            reason: e.to_string(),
        })
    }

    /// Build the layered figment from the process environment.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("SEARCHER_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&["GOOGLE_API_KEY", "GOOGLE_CSE_ID"])
                    .map(|key| key.as_str().to_lowercase().into()),
            )
            .merge(
                Env::prefixed("SEARCHER_")
                    .ignore(&["CONFIG_FILE"])
                    .map(|key| key.as_str().to_lowercase().into())
                    .split("__"),
            )
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Extract and validate configuration from an explicit figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check that both Google credentials are available.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the first absent credential.
    pub fn require_google_credentials(&self) -> Result<GoogleCredentials<'_>, ConfigError> {
        let api_key = self
            .google_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "google_api_key".into(),
                hint: "Set GOOGLE_API_KEY or SEARCHER_GOOGLE_API_KEY".into(),
            })?;
        let cse_id = self
            .google_cse_id
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "google_cse_id".into(),
                hint: "Set GOOGLE_CSE_ID or SEARCHER_GOOGLE_CSE_ID".into(),
            })?;

        Ok(GoogleCredentials { api_key, cse_id })
    }
}
