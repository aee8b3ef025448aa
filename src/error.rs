//! Error taxonomy for the service.
//!
//! Two tiers: [`StorageError`] is what the persistence backends report,
//! [`AppError`] is what the HTTP layer consumes. The translation between
//! them is a pure mapping with no side effects.

use thiserror::Error;

/// Errors surfaced by a [`crate::domain::repositories::UrlRepository`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias uniqueness constraint was violated.
    #[error("url already exists")]
    AlreadyExists,
    /// No mapping matched the requested alias.
    #[error("url not found")]
    NotFound,
    /// Connectivity loss, schema trouble, or any other driver error.
    #[error("storage fault: {0}")]
    Fault(sqlx::Error),
}

impl StorageError {
    /// Classifies a raw SQLx error into the storage taxonomy.
    ///
    /// Unique-constraint violations are detected through the driver's
    /// structured error kind, never by matching on message text, so the
    /// same classification works for both backends.
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if matches!(e, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return Self::AlreadyExists;
            }
        }

        Self::Fault(e)
    }
}

/// Outcomes the HTTP layer understands.
///
/// Handlers decide per route how each variant is rendered (structured JSON
/// body or plain-text status); the [`AppError::Internal`] detail is for
/// logging only and must never reach a response body.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field was empty. Recovered at the handler boundary.
    #[error("{0}")]
    Validation(&'static str),
    /// The alias is already taken.
    #[error("url already exists")]
    AlreadyExists,
    /// No mapping exists for the alias.
    #[error("url not found")]
    NotFound,
    /// Unexpected storage failure; the message carries the driver detail.
    #[error("{0}")]
    Internal(String),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::AlreadyExists => Self::AlreadyExists,
            StorageError::NotFound => Self::NotFound,
            StorageError::Fault(e) => Self::Internal(e.to_string()),
        }
    }
}
