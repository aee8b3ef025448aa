//! Basic-auth guard for the management API.
//!
//! Kept alongside the routes but only wired in when the server config
//! carries credentials; the default deployment runs with the guard off.

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_auth::AuthBasic;
use tracing::warn;

use crate::config::BasicAuthCredentials;

/// Rejects requests whose basic-auth credentials do not match the
/// configured pair.
pub async fn layer(
    State(credentials): State<BasicAuthCredentials>,
    AuthBasic((user, password)): AuthBasic,
    request: Request,
    next: Next,
) -> Response {
    let authorized =
        user == credentials.user && password.as_deref() == Some(credentials.password.as_str());

    if !authorized {
        warn!(%user, "rejected api request with bad credentials");
        return (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic realm=\"url-shortener\"")],
        )
            .into_response();
    }

    next.run(request).await
}
