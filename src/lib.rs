//! # linkshort
//!
//! A small URL-shortening HTTP API built with Axum and SQLx.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - The [`domain::repositories::UrlRepository`]
//!   storage contract
//! - **Application** ([`application`]) - Alias policy and error
//!   normalization in [`application::services::UrlService`]
//! - **Infrastructure** ([`infrastructure`]) - Interchangeable PostgreSQL
//!   and embedded SQLite backends, selected by configuration
//! - **API** ([`api`]) - Axum handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Point at a config file (defaults to config/local.yaml)
//! export CONFIG_PATH=config/local.yaml
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from a YAML file via [`config::Config`]; see the
//! [`config`] module for the file format and storage backend selection.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StorageError};
pub use state::AppState;

/// Commonly used types for external consumers and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::{AppError, StorageError};
    pub use crate::state::AppState;
}
