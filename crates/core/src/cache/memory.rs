//! In-memory cache backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::cache::{Cache, CacheEntry};
use crate::check::CheckResult;

/// Process-local TTL cache over a `HashMap`.
///
/// Reads never remove entries; expired entries stay until overwritten or
/// swept by [`MemoryCache::purge_expired`], which the server runs on a
/// periodic reaper task to bound memory.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove entries expired at `now`. Returns how many were removed.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Number of physically retained entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: CheckResult, expires_at: DateTime<Utc>) {
        let entry = CacheEntry { value, expires_at };
        self.entries.write().await.insert(key.to_string(), entry);
    }
}
