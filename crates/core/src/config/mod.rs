//! Application configuration with layered loading.
//!
//! Loading precedence (highest wins):
//! 1. Environment variables (PINGWARD_*)
//! 2. TOML config file (if PINGWARD_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use chrono::TimeDelta;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    ///
    /// Set via PINGWARD_BIND_ADDR environment variable.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// User-Agent string for outbound probes, so operators can tell this
    /// traffic apart in their server logs.
    ///
    /// Set via PINGWARD_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Probe timeout in seconds.
    ///
    /// Set via PINGWARD_TIMEOUT_SECS environment variable.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum redirect hops a probe follows before counting as failed.
    ///
    /// Set via PINGWARD_MAX_REDIRECTS environment variable.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Cache TTL in seconds for any completed probe, online or offline.
    ///
    /// Set via PINGWARD_COMPLETED_TTL_SECS environment variable.
    #[serde(default = "default_completed_ttl_secs")]
    pub completed_ttl_secs: u64,

    /// Cache TTL in seconds for transport-level probe failures, kept short
    /// so transient failures are re-probed soon.
    ///
    /// Set via PINGWARD_FAILURE_TTL_SECS environment variable.
    #[serde(default = "default_failure_ttl_secs")]
    pub failure_ttl_secs: u64,

    /// Bearer token required on /ping. Unset means the endpoint is public.
    ///
    /// Set via PINGWARD_AUTH_TOKEN environment variable.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Interval in seconds between cache reaper sweeps.
    ///
    /// Set via PINGWARD_REAP_INTERVAL_SECS environment variable.
    #[serde(default = "default_reap_interval_secs")]
    pub reap_interval_secs: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_user_agent() -> String {
    "pingward/0.1".into()
}

fn default_timeout_secs() -> u64 {
    6
}

fn default_max_redirects() -> usize {
    3
}

fn default_completed_ttl_secs() -> u64 {
    300
}

fn default_failure_ttl_secs() -> u64 {
    60
}

fn default_reap_interval_secs() -> u64 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
            completed_ttl_secs: default_completed_ttl_secs(),
            failure_ttl_secs: default_failure_ttl_secs(),
            auth_token: None,
            reap_interval_secs: default_reap_interval_secs(),
        }
    }
}

impl AppConfig {
    /// Probe timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// TTL applied to completed probes.
    pub fn completed_ttl(&self) -> TimeDelta {
        TimeDelta::seconds(self.completed_ttl_secs as i64)
    }

    /// TTL applied to transport failures.
    pub fn failure_ttl(&self) -> TimeDelta {
        TimeDelta::seconds(self.failure_ttl_secs as i64)
    }

    /// Interval between reaper sweeps.
    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval_secs)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `PINGWARD_`
    /// 2. TOML file from `PINGWARD_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("PINGWARD_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed("PINGWARD_").map(|key| key.as_str().to_lowercase().into()));

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
