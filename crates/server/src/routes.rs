//! HTTP surface for the liveness checker.
//!
//! A single route: `GET /ping?url=<raw>`. Validation failures are 400
//! with `status = "invalid_url"`; every probe outcome, online or offline,
//! is 200 with the classification in the body.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;

use pingward_client::{LivenessChecker, validate};
use pingward_core::CheckResult;

use crate::policy::AccessPolicy;

/// Shared state for route handlers.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<LivenessChecker>,
    pub policy: AccessPolicy,
}

/// Query parameters for GET /ping.
#[derive(Debug, Deserialize)]
pub struct PingParams {
    /// The URL to check. A missing parameter validates the same as an
    /// empty one, so the error body keeps the documented JSON shape.
    #[serde(default)]
    pub url: String,
}

/// Build the service router.
pub fn build_router(state: AppState) -> Router {
    Router::new().route("/ping", get(ping)).with_state(state)
}

/// GET /ping
async fn ping(
    State(state): State<AppState>, headers: HeaderMap, Query(params): Query<PingParams>,
) -> impl IntoResponse {
    let authorization = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok());
    if !state.policy.allows(authorization) {
        let body = serde_json::json!({"ok": false, "error": "unauthorized"});
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    let (status, result) = ping_impl(&state.checker, &params.url).await;
    (status, Json(result)).into_response()
}

/// Validate the raw target and run the check.
pub async fn ping_impl(checker: &LivenessChecker, raw_url: &str) -> (StatusCode, CheckResult) {
    match validate(raw_url) {
        Ok(url) => (StatusCode::OK, checker.check(&url, Utc::now()).await),
        Err(e) => {
            tracing::debug!(error = %e, "rejected ping target");
            (StatusCode::BAD_REQUEST, CheckResult::invalid_url())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pingward_client::{ProbeClient, ProbeConfig};
    use pingward_core::{CheckStatus, MemoryCache};
    use chrono::TimeDelta;

    fn test_checker() -> LivenessChecker {
        let probe = ProbeClient::new(ProbeConfig::default()).unwrap();
        LivenessChecker::new(Arc::new(MemoryCache::new()), probe, TimeDelta::seconds(300), TimeDelta::seconds(60))
    }

    #[tokio::test]
    async fn test_ping_impl_online() {
        let mut server = mockito::Server::new_async().await;
        server.mock("HEAD", "/").with_status(200).create_async().await;

        let (status, result) = ping_impl(&test_checker(), &server.url()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result, CheckResult::online(200));
    }

    #[tokio::test]
    async fn test_ping_impl_offline_is_still_200() {
        let mut server = mockito::Server::new_async().await;
        server.mock("HEAD", "/").with_status(404).create_async().await;

        let (status, result) = ping_impl(&test_checker(), &server.url()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result, CheckResult::offline_http(404));
    }

    #[tokio::test]
    async fn test_ping_impl_invalid_url() {
        let (status, result) = ping_impl(&test_checker(), "example.com").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(result, CheckResult::invalid_url());
        assert_eq!(result.status, CheckStatus::InvalidUrl);
    }

    #[tokio::test]
    async fn test_ping_impl_missing_url() {
        let (status, result) = ping_impl(&test_checker(), "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(result, CheckResult::invalid_url());
    }

    #[test]
    fn test_build_router() {
        let state = AppState { checker: Arc::new(test_checker()), policy: AccessPolicy::Public };
        let _router = build_router(state);
    }
}
