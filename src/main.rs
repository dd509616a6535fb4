use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bitrix_lead_relay::bitrix_client::BitrixClient;
use bitrix_lead_relay::config::Config;
use bitrix_lead_relay::handlers::AppState;

/// Main entry point for the relay.
///
/// Initializes tracing, loads configuration, constructs the Bitrix client
/// and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitrix_lead_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let bitrix = BitrixClient::new(
        config.bitrix_base_url.clone(),
        config.notify_user_id.clone(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize Bitrix client: {}", e))?;
    tracing::info!("Bitrix client initialized");

    let state = Arc::new(AppState { config, bitrix });
    let port = state.config.port;

    let app = bitrix_lead_relay::app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
