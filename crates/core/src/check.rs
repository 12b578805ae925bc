//! Liveness check result types.
//!
//! `CheckResult` is both the cached value and the HTTP response body, so
//! its serialized form is the wire format: `{ok, status, code?, error?}`.

use serde::{Deserialize, Serialize};

/// Liveness classification of a checked URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// A probe completed with a status code in [200, 400).
    Online,
    /// A probe completed outside that range, or failed at the transport level.
    Offline,
    /// The input never reached a probe.
    InvalidUrl,
    /// No probe has been performed.
    #[default]
    Unknown,
}

/// Outcome of a liveness probe or cache hit.
///
/// Construct through [`CheckResult::online`], [`CheckResult::offline_http`],
/// [`CheckResult::offline_error`], or [`CheckResult::invalid_url`]. The
/// constructors keep `ok`, `code`, and `error` consistent with `status`:
/// `online` always carries a code in [200, 400); `offline` carries either
/// a code or an error message; `invalid_url` carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the URL is considered reachable.
    pub ok: bool,

    /// The liveness classification.
    pub status: CheckStatus,

    /// HTTP status code, present only when a response was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    /// Transport failure message, present only when no response was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    /// A completed probe with a status code in [200, 400).
    pub fn online(code: u16) -> Self {
        debug_assert!((200..400).contains(&code));
        Self { ok: true, status: CheckStatus::Online, code: Some(code), error: None }
    }

    /// A completed probe with a status code outside [200, 400).
    pub fn offline_http(code: u16) -> Self {
        Self { ok: false, status: CheckStatus::Offline, code: Some(code), error: None }
    }

    /// A probe that failed before any response was received.
    pub fn offline_error(message: impl Into<String>) -> Self {
        Self { ok: false, status: CheckStatus::Offline, code: None, error: Some(message.into()) }
    }

    /// An input rejected by validation.
    pub fn invalid_url() -> Self {
        Self { ok: false, status: CheckStatus::InvalidUrl, code: None, error: None }
    }
}
