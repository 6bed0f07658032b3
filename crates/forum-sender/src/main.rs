use std::sync::Arc;

use anyhow::Context;
use forum_client::StorageClient;
use forum_sender::{build_router, config::Config, state::AppState};
use forum_service::{init_logging, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config.logging);

    tracing::info!("Starting forum sender service");
    tracing::info!(upstream = %config.upstream.base_url, "Forwarding messages to storage API");

    let storage = StorageClient::from_config(&config.upstream)
        .context("Failed to create storage API client")?;

    let state = Arc::new(AppState::new(config.clone(), storage));
    let app = build_router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
