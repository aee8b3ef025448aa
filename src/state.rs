use std::sync::Arc;

use crate::application::services::UrlService;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }
}
