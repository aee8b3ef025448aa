//! Management API route table.

use axum::{
    Router,
    routing::{delete, post},
};

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;

/// Routes mounted under `/api/v1`.
///
/// - `POST   /urls`          - Create a mapping (alias optional)
/// - `DELETE /urls/{alias}`  - Remove a mapping
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(save_handler))
        .route("/urls/{alias}", delete(delete_handler))
}
