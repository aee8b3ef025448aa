//! HTTP server initialization and lifecycle.
//!
//! Connects the configured storage backend, assembles the router, serves
//! until SIGINT/SIGTERM, drains in-flight requests within a bounded grace
//! period, and closes the storage handle last.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::persistence;
use crate::routes::app_router;
use crate::state::AppState;

/// How long in-flight requests may keep running after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the storage backend fails to initialize, the
/// listener cannot bind, or the server hits a runtime error. All of these
/// are fatal; the process should exit rather than serve degraded.
pub async fn run(config: Config) -> Result<()> {
    let storage = persistence::connect(&config.storage).await?;
    tracing::info!(backend = %config.storage.kind, "storage ready");

    let state = AppState::new(Arc::new(UrlService::new(storage.clone())));
    let app = app_router(state, &config.http_server);

    let listener = TcpListener::bind(&config.http_server.address)
        .await
        .with_context(|| format!("failed to bind {}", config.http_server.address))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    shutdown_signal().await;
    tracing::info!("stopping server");
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(joined) => joined.context("server task panicked")??,
        Err(_) => tracing::warn!("graceful shutdown timed out, abandoning in-flight requests"),
    }

    storage.close().await;
    tracing::info!("server stopped");

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for SIGINT");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
