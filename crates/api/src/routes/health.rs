use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// GET /health -- constant liveness probe.
///
/// Deliberately store-independent: the probe answers as long as the
/// process is alive and accepting connections. Consumed by external
/// orchestrators and load balancers.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Mount health check routes at the application root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
