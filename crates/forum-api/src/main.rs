use std::sync::Arc;

use anyhow::Context;
use forum_api::{build_router, config::Config, state::AppState};
use forum_persist::StoreBuilder;
use forum_service::{init_logging, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config.logging);

    tracing::info!("Starting forum storage API");
    tracing::info!(backend = %config.storage.backend, "Opening message store");

    let store = StoreBuilder::new()
        .backend(config.storage.backend)
        .mongodb_uri(&config.database_url)
        .database(&config.storage.database)
        .build()
        .await
        .context("Failed to open message store")?;

    let state = Arc::new(AppState::new(config.clone(), Arc::clone(&store)));
    let app = build_router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await.context("Failed to close message store")?;
    tracing::info!("Message store closed");

    Ok(())
}
