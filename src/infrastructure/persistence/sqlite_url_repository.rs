//! Embedded SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::domain::repositories::UrlRepository;
use crate::error::StorageError;

/// SQLite repository backed by a single database file.
///
/// The pool is capped at one connection: SQLite serializes writes anyway,
/// and a single connection also makes `:memory:` databases usable in
/// tests.
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Opens (creating if needed) the database file and ensures the
    /// schema exists.
    pub async fn connect(path: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let repository = Self { pool };
        repository.init_schema().await?;

        Ok(repository)
    }

    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_urls_alias ON urls (alias)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO urls (url, alias) VALUES (?, ?) RETURNING id")
            .bind(url)
            .bind(alias)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from_sqlx)?;

        Ok(id)
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar("SELECT url FROM urls WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from_sqlx)?
            .ok_or(StorageError::NotFound)
    }

    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM urls WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
