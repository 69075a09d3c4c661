//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (statistics source reachable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::model::Scope;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 if the statistics source answers.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_source_health(&state).await {
        true => StatusCode::OK,
        false => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let source_ok = check_source_health(&state).await;

    Json(HealthResponse {
        status: if source_ok { "healthy" } else { "degraded" }.to_string(),
        source: state.dashboard.source_name().to_string(),
        source_status: if source_ok { "ok" } else { "error" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The global snapshot is the cheapest source query
async fn check_source_health(state: &AppState) -> bool {
    match state.dashboard.current(&Scope::Worldwide).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Statistics source health check failed");
            false
        }
    }
}
