//! Access policy for the ping endpoint.
//!
//! The endpoint ships public. Tightening it is a configuration change:
//! set `auth_token` and callers must present a matching bearer token.

use pingward_core::AppConfig;

/// Who may call the ping endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Anyone may call.
    Public,
    /// Callers must present `Authorization: Bearer <token>`.
    BearerToken(String),
}

impl AccessPolicy {
    /// Derive the policy from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.auth_token {
            Some(token) => Self::BearerToken(token.clone()),
            None => Self::Public,
        }
    }

    /// Decide whether a request with this Authorization header may proceed.
    pub fn allows(&self, authorization: Option<&str>) -> bool {
        match self {
            Self::Public => true,
            Self::BearerToken(token) => authorization
                .and_then(|header| header.strip_prefix("Bearer "))
                .is_some_and(|presented| presented == token),
        }
    }
}
