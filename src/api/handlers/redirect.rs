//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds 302 Found with a `Location` header on success, 400 for an
/// empty alias, 404 plain text when the alias is unknown, and 500 on a
/// storage fault.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Response {
    if alias.is_empty() {
        return (StatusCode::BAD_REQUEST, "alias is required").into_response();
    }

    match state.url_service.get_url(&alias).await {
        Ok(url) => {
            info!(%alias, %url, "redirecting");
            (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
        }
        Err(AppError::NotFound) => {
            info!(%alias, "url not found");
            (StatusCode::NOT_FOUND, "url not found").into_response()
        }
        Err(AppError::Validation(message)) => {
            (StatusCode::BAD_REQUEST, message).into_response()
        }
        Err(err) => {
            error!(%alias, error = %err, "failed to get url");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
    }
}
