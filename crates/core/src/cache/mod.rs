//! TTL cache for liveness check results.
//!
//! The cache is a capability handed to the checker, not ambient state.
//! Backends implement [`Cache`]; the in-memory [`MemoryCache`] is the
//! default and matches the ephemeral transient store this service needs.
//! Entries expire lazily: a read past `expires_at` is a logical miss
//! even while the entry is physically retained.

pub mod hash;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::check::CheckResult;

pub use hash::{canonical_form, fingerprint};
pub use memory::MemoryCache;

/// A cached check result with its absolute expiry time.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The stored check result.
    pub value: CheckResult,
    /// Instant past which the entry is logically absent.
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Whether the entry is past its expiry at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Key-value store for check results, keyed by URL fingerprint.
///
/// `get` returns whatever is stored, expired or not; callers decide
/// freshness against their own clock. `set` replaces the entry for a key
/// atomically; concurrent writers may race, and the last writer wins.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Look up the entry for `key`, if one is stored.
    async fn get(&self, key: &str) -> Option<CacheEntry>;

    /// Store `value` under `key` until `expires_at`, replacing any prior entry.
    async fn set(&self, key: &str, value: CheckResult, expires_at: DateTime<Utc>);
}
