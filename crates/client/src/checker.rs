//! Cache-fronted liveness checking.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use url::Url;

use pingward_core::cache::fingerprint;
use pingward_core::{AppConfig, Cache, CheckResult, Error};

use crate::probe::{ProbeClient, ProbeConfig, ProbeOutcome};

/// Liveness checker with a TTL cache in front of the probe.
///
/// Within the TTL window, repeated checks for one URL never touch the
/// network; the cache bounds the outbound request rate per URL. The
/// backing store is injected, so any [`Cache`] implementation works.
pub struct LivenessChecker {
    cache: Arc<dyn Cache>,
    probe: ProbeClient,
    completed_ttl: TimeDelta,
    failure_ttl: TimeDelta,
}

impl LivenessChecker {
    /// Create a checker from its parts.
    pub fn new(cache: Arc<dyn Cache>, probe: ProbeClient, completed_ttl: TimeDelta, failure_ttl: TimeDelta) -> Self {
        Self { cache, probe, completed_ttl, failure_ttl }
    }

    /// Create a checker with probe parameters and TTLs from configuration.
    pub fn from_config(cache: Arc<dyn Cache>, config: &AppConfig) -> Result<Self, Error> {
        let probe = ProbeClient::new(ProbeConfig::from(config))?;
        Ok(Self::new(cache, probe, config.completed_ttl(), config.failure_ttl()))
    }

    /// Check whether `url` is reachable, consulting the cache first.
    ///
    /// Never fails: every probe outcome becomes a well-formed result.
    /// A completed probe is cached for the long TTL whatever its status
    /// code; only transport failures get the short TTL so they are
    /// re-probed soon. Concurrent checks of one URL may probe twice and
    /// race on the store; the last writer wins.
    pub async fn check(&self, url: &Url, now: DateTime<Utc>) -> CheckResult {
        let key = fingerprint(url);

        if let Some(entry) = self.cache.get(&key).await
            && now < entry.expires_at
        {
            tracing::debug!(%url, "cache hit");
            return entry.value;
        }

        let (result, ttl) = match self.probe.probe(url).await {
            ProbeOutcome::Completed(code) => {
                let result = if (200..400).contains(&code) {
                    CheckResult::online(code)
                } else {
                    CheckResult::offline_http(code)
                };
                (result, self.completed_ttl)
            }
            ProbeOutcome::TransportFailure(message) => (CheckResult::offline_error(message), self.failure_ttl),
        };

        self.cache.set(&key, result.clone(), now + ttl).await;

        result
    }
}
