//! pingward server entry point.
//!
//! Boots the HTTP server that exposes the liveness check endpoint,
//! backed by an in-memory TTL cache with a periodic reaper.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pingward_client::LivenessChecker;
use pingward_core::{AppConfig, MemoryCache};

mod policy;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load()?;

    let cache = Arc::new(MemoryCache::new());
    spawn_reaper(cache.clone(), config.reap_interval());

    let checker = LivenessChecker::from_config(cache, &config)?;
    let state = routes::AppState {
        checker: Arc::new(checker),
        policy: policy::AccessPolicy::from_config(&config),
    };

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "pingward listening");

    axum::serve(listener, routes::build_router(state)).await?;

    Ok(())
}

/// Periodically sweep expired cache entries.
///
/// Expiry itself is lazy; the reaper only bounds memory held by entries
/// nobody asks about again.
fn spawn_reaper(cache: Arc<MemoryCache>, interval: std::time::Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; skip it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = cache.purge_expired(chrono::Utc::now()).await;
            if removed > 0 {
                tracing::debug!(removed, "reaped expired cache entries");
            }
        }
    });
}
