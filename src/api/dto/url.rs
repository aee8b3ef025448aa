//! DTOs for the URL management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/v1/urls`.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The original URL the alias will resolve to.
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,

    /// Optional caller-chosen alias; generated when absent or empty.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Uniform response envelope for the JSON endpoints.
///
/// Fields are omitted when unset, mirroring the wire format clients
/// already depend on.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: "ok",
            alias: Some(alias),
            error: None,
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: "deleted",
            alias: None,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            alias: None,
            error: Some(message.into()),
        }
    }
}
