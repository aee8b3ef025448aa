//! Handler for creating URL mappings.

use axum::{Json, extract::State};
use tracing::{error, info, warn};
use validator::Validate;

use crate::api::dto::url::{SaveRequest, StatusResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping for a long URL, generating an alias when none is
/// supplied.
///
/// # Endpoint
///
/// `POST /api/v1/urls` with body `{"url": string, "alias"?: string}`.
///
/// All outcomes are reported with HTTP 200 and a [`StatusResponse`] body:
/// `{"status":"ok","alias":...}` on success, `{"status":"error","error":...}`
/// for an empty URL, a taken alias, or a storage failure. Storage detail
/// is logged, never returned.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Json<StatusResponse> {
    if payload.validate().is_err() {
        warn!("url is required");
        return Json(StatusResponse::error("url is required"));
    }

    match state
        .url_service
        .save_url(&payload.url, payload.alias.as_deref())
        .await
    {
        Ok(alias) => {
            info!(%alias, "url saved");
            Json(StatusResponse::ok(alias))
        }
        Err(AppError::AlreadyExists) => {
            info!(alias = ?payload.alias, "url already exists");
            Json(StatusResponse::error("url already exists"))
        }
        Err(AppError::Validation(message)) => {
            warn!(message, "invalid save request");
            Json(StatusResponse::error(message))
        }
        Err(err) => {
            error!(error = %err, "failed to save url");
            Json(StatusResponse::error("failed to save url"))
        }
    }
}
