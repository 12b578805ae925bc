//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::AppConfig;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `bind_addr` is not a parseable socket address
    /// - `timeout_secs` is 0 or exceeds 5 minutes
    /// - either TTL is 0
    /// - `max_redirects` exceeds 10
    /// - `user_agent` or a configured `auth_token` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid {
                field: "bind_addr".into(),
                reason: format!("{} is not a socket address", self.bind_addr),
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid { field: "timeout_secs".into(), reason: "must be greater than 0".into() });
        }
        if self.timeout_secs > 300 {
            return Err(ConfigError::Invalid {
                field: "timeout_secs".into(),
                reason: "must not exceed 5 minutes (300s)".into(),
            });
        }

        if self.completed_ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "completed_ttl_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }
        if self.failure_ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "failure_ttl_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }

        if self.max_redirects > 10 {
            return Err(ConfigError::Invalid { field: "max_redirects".into(), reason: "must not exceed 10".into() });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if let Some(token) = &self.auth_token
            && token.is_empty()
        {
            return Err(ConfigError::Invalid {
                field: "auth_token".into(),
                reason: "must not be empty when set; unset it to keep the endpoint public".into(),
            });
        }

        Ok(())
    }
}
