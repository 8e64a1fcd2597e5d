use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `ok` or `degraded`.
    pub status: &'static str,
    /// Time the check ran (UTC).
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Database reachability.
    pub database: DatabaseHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    pub connected: bool,
}

/// GET /health -- returns service and database health.
///
/// Responds 503 when the database is unreachable so orchestrator health
/// checks can gate traffic on it.
async fn health_check(State(state): State<AppState>) -> Response {
    let connected = guidebook_db::health_check(&state.pool).await.is_ok();

    let response = HealthResponse {
        status: if connected { "ok" } else { "degraded" },
        timestamp: chrono::Utc::now(),
        database: DatabaseHealth { connected },
    };

    let status = if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response)).into_response()
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
