//! Unified error types for pingward.
//!
//! Probe transport failures are deliberately absent: they classify into
//! `offline` check results and never surface as errors.

/// Unified error types for the pingward service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not an absolute http(s) URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("CLIENT_ERROR: {0}")]
    HttpClient(String),

    /// Configuration failed to load or validate.
    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] crate::config::ConfigError),
}
