//! Thinking Studio HTTP server.

use tracing::info;
use tracing_subscriber::EnvFilter;

use thinking_studio::adapters::http::build_router;
use thinking_studio::config::AppConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config)?;

    let addr = config.server.socket_addr()?;
    let app = build_router(&config);

    info!(
        %addr,
        analysis = config.features.enable_analysis,
        "Starting Thinking Studio"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` overrides the configured log level.
fn init_tracing(config: &AppConfig) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.features.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
