//! URL mapping service: alias policy and error normalization.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, StorageError};
use crate::utils::alias::generate_alias;

/// Attempts at generating a fresh alias before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating, resolving, and deleting URL mappings.
///
/// Validates input before any storage call, decides the alias when the
/// caller supplies none, and normalizes [`StorageError`] into the three
/// outcomes the HTTP layer understands (conflict, not found, internal).
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Persists a mapping and returns the alias it is stored under.
    ///
    /// A caller-supplied alias is used as-is and saved exactly once; a
    /// missing or empty alias triggers the generation policy, which
    /// retries on collision. Uniqueness is enforced by the insert itself
    /// rather than a check-then-insert sequence, so two concurrent saves
    /// of the same alias cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty URL (storage is not
    /// called), [`AppError::AlreadyExists`] when the alias is taken, and
    /// [`AppError::Internal`] for storage faults or generation exhaustion.
    pub async fn save_url(&self, url: &str, alias: Option<&str>) -> Result<String, AppError> {
        if url.is_empty() {
            return Err(AppError::Validation("url is required"));
        }

        match alias {
            Some(alias) if !alias.is_empty() => {
                self.repository.save_url(url, alias).await?;
                Ok(alias.to_string())
            }
            _ => self.save_with_generated_alias(url).await,
        }
    }

    /// Resolves an alias to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty alias,
    /// [`AppError::NotFound`] when no mapping exists.
    pub async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            return Err(AppError::Validation("alias is required"));
        }

        Ok(self.repository.get_url(alias).await?)
    }

    /// Deletes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty alias,
    /// [`AppError::NotFound`] when the alias was never saved or is
    /// already deleted.
    pub async fn delete_url(&self, alias: &str) -> Result<(), AppError> {
        if alias.is_empty() {
            return Err(AppError::Validation("alias is required"));
        }

        Ok(self.repository.delete_url(alias).await?)
    }

    async fn save_with_generated_alias(&self, url: &str) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let alias = generate_alias();

            match self.repository.save_url(url, &alias).await {
                Ok(_) => return Ok(alias),
                Err(StorageError::AlreadyExists) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::Internal(
            "alias generation exhausted retry budget".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use mockall::Sequence;

    #[tokio::test]
    async fn test_save_url_with_custom_alias() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save_url()
            .withf(|url, alias| url == "https://example.com" && alias == "ex1")
            .times(1)
            .returning(|_, _| Ok(1));

        let service = UrlService::new(Arc::new(mock_repo));

        let alias = service
            .save_url("https://example.com", Some("ex1"))
            .await
            .unwrap();

        assert_eq!(alias, "ex1");
    }

    #[tokio::test]
    async fn test_save_url_generates_alias_when_missing() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save_url()
            .withf(|_, alias| alias.len() == 8)
            .times(1)
            .returning(|_, _| Ok(1));

        let service = UrlService::new(Arc::new(mock_repo));

        let alias = service.save_url("https://example.com", None).await.unwrap();

        assert_eq!(alias.len(), 8);
    }

    #[tokio::test]
    async fn test_save_url_treats_empty_alias_as_missing() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save_url()
            .withf(|_, alias| !alias.is_empty())
            .times(1)
            .returning(|_, _| Ok(1));

        let service = UrlService::new(Arc::new(mock_repo));

        let alias = service
            .save_url("https://example.com", Some(""))
            .await
            .unwrap();

        assert!(!alias.is_empty());
    }

    #[tokio::test]
    async fn test_save_url_empty_url_never_reaches_storage() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo.expect_save_url().times(0);

        let service = UrlService::new(Arc::new(mock_repo));

        let result = service.save_url("", Some("ex1")).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_save_url_custom_alias_conflict() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save_url()
            .times(1)
            .returning(|_, _| Err(StorageError::AlreadyExists));

        let service = UrlService::new(Arc::new(mock_repo));

        let result = service.save_url("https://example.com", Some("taken")).await;

        assert!(matches!(result, Err(AppError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_generated_alias_retries_on_collision() {
        let mut mock_repo = MockUrlRepository::new();
        let mut seq = Sequence::new();

        mock_repo
            .expect_save_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(StorageError::AlreadyExists));

        mock_repo
            .expect_save_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(2));

        let service = UrlService::new(Arc::new(mock_repo));

        let alias = service.save_url("https://example.com", None).await.unwrap();

        assert_eq!(alias.len(), 8);
    }

    #[tokio::test]
    async fn test_generated_alias_gives_up_after_retry_budget() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save_url()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_, _| Err(StorageError::AlreadyExists));

        let service = UrlService::new(Arc::new(mock_repo));

        let result = service.save_url("https://example.com", None).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_save_url_storage_fault_is_internal() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save_url()
            .times(1)
            .returning(|_, _| Err(StorageError::Fault(sqlx::Error::PoolClosed)));

        let service = UrlService::new(Arc::new(mock_repo));

        let result = service.save_url("https://example.com", Some("ex1")).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_get_url_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_get_url()
            .withf(|alias| alias == "ex1")
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let service = UrlService::new(Arc::new(mock_repo));

        let url = service.get_url("ex1").await.unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_get_url_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_get_url()
            .times(1)
            .returning(|_| Err(StorageError::NotFound));

        let service = UrlService::new(Arc::new(mock_repo));

        let result = service.get_url("missing").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_url_empty_alias_never_reaches_storage() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo.expect_get_url().times(0);

        let service = UrlService::new(Arc::new(mock_repo));

        let result = service.get_url("").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_url_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_delete_url()
            .times(1)
            .returning(|_| Err(StorageError::NotFound));

        let service = UrlService::new(Arc::new(mock_repo));

        let result = service.delete_url("missing").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_url_success() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_delete_url()
            .withf(|alias| alias == "ex1")
            .times(1)
            .returning(|_| Ok(()));

        let service = UrlService::new(Arc::new(mock_repo));

        assert!(service.delete_url("ex1").await.is_ok());
    }
}
