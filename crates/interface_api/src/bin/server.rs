//! Finance Engine - API Server Binary
//!
//! Starts the HTTP API in front of the analysis engine.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin finance-api
//!
//! # Run with environment variables
//! FINANCE_API_PORT=9000 FINANCE_API_CACHE_ENABLED=false cargo run --bin finance-api
//! ```
//!
//! # Environment Variables
//!
//! * `FINANCE_API_HOST` - Server host (default: 0.0.0.0)
//! * `FINANCE_API_PORT` - Server port (default: 8080)
//! * `FINANCE_API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `FINANCE_API_CACHE_ENABLED` - Cache full analyses (default: true)
//! * `FINANCE_API_CACHE_TTL_SECS` - Cached result lifetime (default: 300)
//! * `FINANCE_API_CACHE_MAX_ENTRIES` - Most cached results held at once (default: 1024)
//! * `FINANCE_API_ENGINE__...` - Engine policy overrides, e.g.
//!   `FINANCE_API_ENGINE__DEBT__MAX_SIMULATION_MONTHS=360`

use std::net::SocketAddr;

use anyhow::Context;
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, builds the engine and starts
/// the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The engine policies are inconsistent
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("loading configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        cache_enabled = config.cache_enabled,
        cache_ttl_secs = config.cache_ttl_secs,
        "Starting Finance Engine API Server"
    );

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("parsing server address")?;
    let app = create_router(config).context("building analysis engine")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
