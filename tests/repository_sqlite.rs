mod common;

use linkshort::domain::repositories::UrlRepository;
use linkshort::error::StorageError;

#[tokio::test]
async fn test_save_then_get_roundtrip() {
    let repo = common::sqlite_repository().await;

    let id = repo.save_url("https://example.com", "ex1").await.unwrap();
    assert!(id > 0);

    let url = repo.get_url("ex1").await.unwrap();
    assert_eq!(url, "https://example.com");
}

#[tokio::test]
async fn test_duplicate_alias_is_rejected_and_original_survives() {
    let repo = common::sqlite_repository().await;

    repo.save_url("https://example.com", "ex1").await.unwrap();

    let err = repo.save_url("https://other.com", "ex1").await.unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists));

    assert_eq!(repo.get_url("ex1").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_get_unknown_alias_is_not_found() {
    let repo = common::sqlite_repository().await;

    let err = repo.get_url("missing").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let repo = common::sqlite_repository().await;

    repo.save_url("https://example.com", "ex1").await.unwrap();
    repo.delete_url("ex1").await.unwrap();

    let err = repo.get_url("ex1").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_delete_unknown_alias_is_not_found_and_has_no_effect() {
    let repo = common::sqlite_repository().await;

    repo.save_url("https://example.com", "ex1").await.unwrap();

    let err = repo.delete_url("missing").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));

    // The unrelated mapping is untouched.
    assert_eq!(repo.get_url("ex1").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let repo = common::sqlite_repository().await;

    repo.save_url("https://example.com", "ex1").await.unwrap();
    assert_eq!(repo.get_url("ex1").await.unwrap(), "https://example.com");

    let err = repo.save_url("https://example.com", "ex1").await.unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists));

    repo.delete_url("ex1").await.unwrap();

    let err = repo.get_url("ex1").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_close_is_idempotent() {
    let repo = common::sqlite_repository().await;

    repo.close().await;
    repo.close().await;
}
