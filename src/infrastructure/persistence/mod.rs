//! Persistence backends for URL mappings.
//!
//! Two interchangeable implementations of
//! [`UrlRepository`](crate::domain::repositories::UrlRepository) exist: a
//! networked PostgreSQL backend and an embedded SQLite file backend. The
//! [`connect`] factory picks one at startup from configuration; callers
//! only ever see the trait object.

mod pg_url_repository;
mod sqlite_url_repository;

pub use pg_url_repository::PgUrlRepository;
pub use sqlite_url_repository::SqliteUrlRepository;

use crate::config::{StorageConfig, StorageKind};
use crate::domain::repositories::UrlRepository;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Connects the backend selected by `config` and prepares its schema.
///
/// # Errors
///
/// Returns an error when the matching backend section is missing from the
/// config or the initial connection / schema setup fails. Both are fatal
/// at startup.
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn UrlRepository>> {
    match config.kind {
        StorageKind::Postgres => {
            let pg = config
                .postgres
                .as_ref()
                .context("storage type is postgres but the postgres section is missing")?;

            let repository = PgUrlRepository::connect(pg)
                .await
                .context("failed to init postgres storage")?;

            Ok(Arc::new(repository))
        }
        StorageKind::Sqlite => {
            let sqlite = config
                .sqlite
                .as_ref()
                .context("storage type is sqlite but the sqlite section is missing")?;

            let repository = SqliteUrlRepository::connect(&sqlite.path)
                .await
                .context("failed to init sqlite storage")?;

            Ok(Arc::new(repository))
        }
    }
}
