//! Handler for deleting URL mappings.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use crate::api::dto::url::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /api/v1/urls/{alias}`
///
/// Responds with HTTP 200 and a [`StatusResponse`] body in every case:
/// `{"status":"deleted"}` on success, `{"status":"error","error":"url not
/// found"}` for an unknown alias, a generic error message on storage
/// failure.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Json<StatusResponse> {
    match state.url_service.delete_url(&alias).await {
        Ok(()) => {
            info!(%alias, "url deleted");
            Json(StatusResponse::deleted())
        }
        Err(AppError::NotFound) => {
            info!(%alias, "url not found");
            Json(StatusResponse::error("url not found"))
        }
        Err(AppError::Validation(message)) => Json(StatusResponse::error(message)),
        Err(err) => {
            error!(%alias, error = %err, "failed to delete url");
            Json(StatusResponse::error("failed to delete url"))
        }
    }
}
