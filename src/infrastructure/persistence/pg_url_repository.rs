//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::config::PostgresConfig;
use crate::domain::repositories::UrlRepository;
use crate::error::StorageError;

/// PostgreSQL repository for URL mappings.
///
/// The pool provides the concurrency guarantees the service layer relies
/// on; alias uniqueness is enforced by the `UNIQUE` constraint, not by
/// application-level checks.
pub struct PgUrlRepository {
    pool: PgPool,
}

impl PgUrlRepository {
    /// Connects to PostgreSQL and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns an error on a bad `sslmode` value, a failed connection, or
    /// failed schema setup.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, sqlx::Error> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.dbname)
            .ssl_mode(config.sslmode.parse::<PgSslMode>()?);

        let pool = PgPoolOptions::new()
            .max_connections(10)
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
                id BIGSERIAL PRIMARY KEY,
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
impl UrlRepository for PgUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO urls (url, alias) VALUES ($1, $2) RETURNING id")
            .bind(url)
            .bind(alias)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from_sqlx)?;

        Ok(id)
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar("SELECT url FROM urls WHERE alias = $1")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from_sqlx)?
            .ok_or(StorageError::NotFound)
    }

    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM urls WHERE alias = $1")
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
