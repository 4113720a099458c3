use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::response::MessageResponse;
use crate::state::AppState;

/// Readiness response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /test -- liveness. Never touches storage.
async fn liveness() -> Json<MessageResponse> {
    Json(MessageResponse::new("test route"))
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match enrollment_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount liveness and readiness routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/test", get(liveness))
        .route("/health", get(health_check))
}
