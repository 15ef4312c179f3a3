//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// `connected` or `disconnected`.
    pub database: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// GET /api/health - Always 200; a failed ping only downgrades `database`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.health.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            "disconnected"
        }
    };

    Json(HealthResponse {
        status: "healthy",
        database,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health_check))
}
