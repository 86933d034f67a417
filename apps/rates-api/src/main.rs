//! # Envios Rates API
//!
//! HTTP server exposing the shipping-rate resolver.
//!
//! ## Boot Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tracing init ──► env config ──► catalog load + validate ──►            │
//! │  router ──► serve (graceful shutdown on SIGINT/SIGTERM)                 │
//! │                                                                         │
//! │  An invalid catalog aborts boot: no server is better than one that      │
//! │  quotes wrong prices.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rates_api::config::ApiConfig;
use rates_api::routes::build_router;
use rates_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (RUST_LOG overrides the default filter)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rates_api=info,info")),
        )
        .with_target(true)
        .init();

    info!("Starting Envios rates API...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(port = config.port, catalog = ?config.catalog_path, "Configuration loaded");

    // Load and validate the rate catalog - refuses to boot on bad data
    let catalog = config.load_catalog()?;
    info!(
        threshold = catalog.threshold,
        regions = catalog.regions.len(),
        holidays = catalog.schedule.holidays.len(),
        "Rate catalog validated"
    );

    // Build shared state and router
    let state = AppState::new(catalog);
    let app = build_router(state);

    // Bind and serve
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
