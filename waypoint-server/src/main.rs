use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waypoint_routing::OsrmClient;
use waypoint_server::{
    api, config::Config, repository::RunnerStore, simulation::RunnerMover, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waypoint_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Waypoint server...");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    tracing::info!("Configuration loaded");
    tracing::info!("  Bind address: {}", config.bind_addr);
    tracing::info!("  OSRM URL: {}", config.osrm_url);
    tracing::info!("  Simulation interval: {:?}", config.simulation_interval);

    let runners = Arc::new(RunnerStore::seeded());
    tracing::info!("Loaded {} runners", runners.len());

    let router = OsrmClient::new(config.osrm_url.as_str(), config.route_timeout)
        .context("Failed to create routing client")?;

    let state = AppState::new(Arc::clone(&runners), Arc::new(router));

    // Background movement, stopped once the server has drained
    let simulation = RunnerMover::new(
        runners,
        config.simulation_interval,
        config.simulation_jitter,
    )
    .spawn();

    // Build router with all API endpoints
    let app = api::create_router(state);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutting down runner simulation...");
    simulation
        .shutdown()
        .await
        .context("Runner simulation task failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
