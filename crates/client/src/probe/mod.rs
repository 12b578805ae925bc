//! Outbound reachability probe.
//!
//! A probe is a single HEAD request against the validated URL: no body
//! transfer, a bounded timeout, bounded redirect following, and an
//! identifying User-Agent. Whatever happens, the outcome is data, not an
//! error: either a response arrived (with some status code) or the
//! transport failed (DNS, connect, timeout, TLS, redirect limit).

pub mod url;

use std::time::Duration;

use reqwest::{Client, Url};

use pingward_core::{AppConfig, Error};

pub use url::{UrlError, validate};

/// Configuration for the probe client.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// User agent string (default: "pingward/0.1")
    pub user_agent: String,

    /// Per-probe timeout (default: 6s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 3)
    pub max_redirects: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { user_agent: "pingward/0.1".to_string(), timeout: Duration::from_secs(6), max_redirects: 3 }
    }
}

impl From<&AppConfig> for ProbeConfig {
    fn from(config: &AppConfig) -> Self {
        Self { user_agent: config.user_agent.clone(), timeout: config.timeout(), max_redirects: config.max_redirects }
    }
}

/// Raw outcome of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A response was received, with this status code.
    Completed(u16),
    /// No response was received; the message describes the failure.
    TransportFailure(String),
}

/// HTTP client that issues reachability probes.
pub struct ProbeClient {
    http: Client,
    config: ProbeConfig,
}

impl ProbeClient {
    /// Create a new probe client with the given configuration.
    pub fn new(config: ProbeConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .build()
            .map_err(|e| Error::HttpClient(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Probe a URL for reachability.
    ///
    /// The request targets exactly the URL it is given, with no rewriting.
    pub async fn probe(&self, url: &Url) -> ProbeOutcome {
        match self.http.head(url.clone()).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                tracing::debug!(%url, code, "probe completed");
                ProbeOutcome::Completed(code)
            }
            Err(e) => {
                let message = describe_failure(&e);
                tracing::debug!(%url, error = %message, "probe transport failure");
                ProbeOutcome::TransportFailure(message)
            }
        }
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}

/// Turn a reqwest error into the message stored on offline results.
fn describe_failure(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    }
}
