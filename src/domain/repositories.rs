//! Repository trait for URL mapping storage.

use crate::error::StorageError;
use async_trait::async_trait;

/// Storage contract for alias → URL mappings.
///
/// This is the system's single abstraction boundary: the same interface is
/// implemented against PostgreSQL and against an embedded SQLite file, and
/// the backend is chosen at startup by configuration without any caller
/// code changing. Implementations must be safe for concurrent use — the
/// connection pool provides the synchronization, the service layer takes
/// no locks of its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`]
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and returns its surrogate id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] when the alias uniqueness
    /// constraint is violated, [`StorageError::Fault`] on any other
    /// driver error. The mapping already stored under the alias is left
    /// unchanged on conflict.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Resolves an alias to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no row matches,
    /// [`StorageError::Fault`] otherwise.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when zero rows were affected,
    /// [`StorageError::Fault`] otherwise.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;

    /// Releases the underlying pool. Safe to call more than once.
    async fn close(&self);
}
