use linkshort::config::{Config, Env};
use linkshort::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    init_tracing(config.env);

    tracing::info!(
        env = %config.env,
        version = env!("CARGO_PKG_VERSION"),
        "starting url shortener"
    );
    tracing::debug!("debug messages are enabled");

    server::run(config).await
}

/// Log format and verbosity follow the deployment environment: readable
/// debug output locally, JSON elsewhere. `RUST_LOG` still overrides the
/// filter either way.
fn init_tracing(env: Env) {
    let default_level = match env {
        Env::Local | Env::Dev => "debug",
        Env::Prod => "info",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    match env {
        Env::Local => tracing_subscriber::fmt().with_env_filter(filter).init(),
        Env::Dev | Env::Prod => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}
