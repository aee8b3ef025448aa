//! Application configuration loaded from a YAML file.
//!
//! The file path comes from the `CONFIG_PATH` environment variable and
//! defaults to `config/local.yaml`. Loading is fatal-on-error: a missing,
//! unreadable, or unparsable file (including an unrecognized storage
//! backend) aborts startup before the server binds.
//!
//! ```yaml
//! env: local
//! storage:
//!   type: sqlite
//!   sqlite:
//!     path: ./storage/urls.db
//! http_server:
//!   address: 0.0.0.0:8082
//!   timeout_secs: 4
//!   idle_timeout_secs: 60
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::Path;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub env: Env,
    pub storage: StorageConfig,
    pub http_server: HttpServerConfig,
}

/// Deployment environment, controls log format and verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    #[default]
    Local,
    Dev,
    Prod,
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Dev => write!(f, "dev"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

/// Storage backend selection plus per-backend connection parameters.
///
/// Only the section matching `type` needs to be present; the factory in
/// [`crate::infrastructure::persistence`] rejects a missing section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(rename = "type")]
    pub kind: StorageKind,
    pub sqlite: Option<SqliteConfig>,
    pub postgres: Option<PostgresConfig>,
}

/// Which physical backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Postgres,
    Sqlite,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Postgres => write!(f, "postgres"),
            StorageKind::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Embedded file backend parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SqliteConfig {
    pub path: String,
}

/// Networked PostgreSQL backend parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PostgresConfig {
    pub host: String,
    #[serde(default = "default_pg_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    #[serde(default = "default_sslmode")]
    pub sslmode: String,
}

/// HTTP server parameters.
///
/// `user`/`password` are the basic-auth credentials for the `/api/v1`
/// routes; when either is absent the guard stays disabled.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Per-request timeout, applied as a middleware on every route.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Keep-alive idle timeout. Accepted for deployment parity; the
    /// listener currently relies on hyper's defaults.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            user: None,
            password: None,
            timeout_secs: default_timeout_secs(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

/// Basic-auth credentials resolved from the server config.
#[derive(Debug, Clone)]
pub struct BasicAuthCredentials {
    pub user: String,
    pub password: String,
}

impl HttpServerConfig {
    /// Returns credentials only when both user and password are configured.
    pub fn basic_auth(&self) -> Option<BasicAuthCredentials> {
        match (&self.user, &self.password) {
            (Some(user), Some(password)) => Some(BasicAuthCredentials {
                user: user.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}

impl Config {
    /// Loads configuration from the path in `CONFIG_PATH`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or does not
    /// deserialize into a valid [`Config`].
    pub fn load() -> Result<Self> {
        let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config/local.yaml".to_string());
        Self::from_file(&path)
    }

    /// Loads configuration from an explicit YAML file path.
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("config file does not exist: {path}");
        }

        let settings = ::config::Config::builder()
            .add_source(::config::File::new(path, ::config::FileFormat::Yaml))
            .build()
            .with_context(|| format!("failed to read config file: {path}"))?;

        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config: {path}"))
    }

    /// Parses configuration from an in-memory YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(
                source,
                ::config::FileFormat::Yaml,
            ))
            .build()
            .context("failed to read config")?;

        settings.try_deserialize().context("failed to parse config")
    }
}

fn default_address() -> String {
    "0.0.0.0:8082".to_string()
}

fn default_pg_port() -> u16 {
    5432
}

fn default_sslmode() -> String {
    "disable".to_string()
}

fn default_timeout_secs() -> u64 {
    4
}

fn default_idle_timeout_secs() -> u64 {
    60
}
