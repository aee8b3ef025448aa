#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use linkshort::application::services::UrlService;
use linkshort::config::HttpServerConfig;
use linkshort::infrastructure::persistence::SqliteUrlRepository;
use linkshort::routes::app_router;
use linkshort::state::AppState;

pub async fn sqlite_repository() -> Arc<SqliteUrlRepository> {
    Arc::new(
        SqliteUrlRepository::connect(":memory:")
            .await
            .expect("failed to open in-memory sqlite"),
    )
}

pub async fn test_state() -> AppState {
    let repository = sqlite_repository().await;
    AppState::new(Arc::new(UrlService::new(repository)))
}

pub async fn test_server() -> TestServer {
    test_server_with_config(&HttpServerConfig::default()).await
}

pub async fn test_server_with_config(http: &HttpServerConfig) -> TestServer {
    let state = test_state().await;
    TestServer::new(app_router(state, http)).unwrap()
}
