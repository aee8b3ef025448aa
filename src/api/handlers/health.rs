//! Banner and health check handlers.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Plain-text banner at `GET /`.
pub async fn index_handler() -> &'static str {
    "URL Shortener API"
}

/// Liveness probe at `GET /health`.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
