//! weather-ledger server entry point.
//!
//! Opens the SQLite store, builds the provider client and starts the Axum
//! HTTP server.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use weather_ledger::api;
use weather_ledger::app_state::AppState;
use weather_ledger::config::ServiceConfig;
use weather_ledger::persistence::SqlitePersistence;
use weather_ledger::provider::{OpenWeatherProvider, WeatherProvider};
use weather_ledger::service::{HistoryService, WeatherService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = ServiceConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    tracing::info!(addr = %config.listen_addr, "starting weather-ledger");

    // Build persistence and provider
    let store = SqlitePersistence::connect(&config).await?;
    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherProvider::new(&config.provider)?);

    // Build service layer
    let app_state = AppState {
        weather_service: WeatherService::new(provider, store.clone()),
        history_service: HistoryService::new(store.clone()),
    };

    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
