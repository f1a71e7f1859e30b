//! Health Check Handlers
//!
//! # Endpoints
//! - `GET /health` - Liveness, never touches the store
//! - `GET /health/ready` - Readiness, pings the store

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::application::dto::response::StatusResponse;
use crate::startup::AppState;

/// Basic health check endpoint
pub async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

/// Readiness probe - 200 when the store answers PING, 503 otherwise
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(StatusResponse { status: "ready" })),
        Err(e) => {
            tracing::error!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse {
                    status: "unavailable",
                }),
            )
        }
    }
}
