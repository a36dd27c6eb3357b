//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// Credentials are not checked here; see `require_google_credentials`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `result_count` is outside 1-10
    /// - `purge_interval_secs` is 0
    /// - `user_agent` is empty
    /// - `bind_addr` is not a socket address
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if !(1..=10).contains(&self.result_count) {
            return Err(ConfigError::Invalid {
                field: "result_count".into(),
                reason: "must be between 1 and 10".into(),
            });
        }

        if self.purge_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "purge_interval_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        self.socket_addr()?;

        if self.google_api_key.is_none() || self.google_cse_id.is_none() {
            tracing::warn!("Google credentials are not fully configured; searches will fail until they are set");
        }

        Ok(())
    }
}
