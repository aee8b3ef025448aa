//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`                   - Plain-text banner (public)
//! - `GET    /health`             - Liveness probe (public)
//! - `GET    /{alias}`            - Short link redirect (public)
//! - `POST   /api/v1/urls`        - Create mapping
//! - `DELETE /api/v1/urls/{alias}`- Delete mapping
//!
//! # Middleware
//!
//! Request-id assignment, tracing span per request, request timeout, and
//! request-id propagation on responses. The `/api/v1` routes additionally
//! get a basic-auth guard when credentials are configured.

use std::time::Duration;

use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

use crate::api;
use crate::api::handlers::{health_handler, index_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::config::HttpServerConfig;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, http: &HttpServerConfig) -> Router {
    let mut api_router = api::routes::api_routes();

    if let Some(credentials) = http.basic_auth() {
        api_router = api_router.route_layer(middleware::from_fn_with_state(
            credentials,
            auth::layer,
        ));
    }

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/api/v1", api_router)
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::set_request_id_layer())
                .layer(tracing::layer())
                .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_secs)))
                .layer(tracing::propagate_request_id_layer()),
        )
}
