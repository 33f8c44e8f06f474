//! Wompi Service - example HTTP API over the Wompi payments and payouts APIs
//!
//! This is the main entry point for the service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wompi_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wompi=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wompi Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        wompi_url = %config.wompi_url,
        payouts_url = %config.payouts_url,
        payouts_api_key_configured = %config.payouts_api_key.is_some(),
        payouts_user_configured = %config.payouts_user_id.is_some(),
        "Service configuration loaded"
    );

    // Build app state
    let listen_addr = config.listen_addr.clone();
    let state = AppState::new(config)?;

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
