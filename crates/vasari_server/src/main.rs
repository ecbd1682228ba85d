//! Vasari service binary.

use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vasari_client::{ChatApi, ClientConfig, GenerationClient, RequestPacer};
use vasari_pipeline::Orchestrator;
use vasari_server::{AppState, create_router};
use vasari_store::InMemoryArticleStore;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REQUESTS_PER_MINUTE: NonZeroU32 = NonZeroU32::new(20).unwrap();

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env();
    if !config.api_key_configured().await {
        info!("No API key in the environment; POST /configure to set one");
    }

    let per_minute = std::env::var("VASARI_REQUESTS_PER_MINUTE")
        .ok()
        .and_then(|v| v.parse().ok())
        .and_then(NonZeroU32::new)
        .unwrap_or(DEFAULT_REQUESTS_PER_MINUTE);
    let pacer = RequestPacer::per_minute(per_minute);

    let store = Arc::new(InMemoryArticleStore::new());
    let client = GenerationClient::new(ChatApi::new(config.clone()));
    let orchestrator = Orchestrator::new(client, store.clone(), pacer);
    let state = AppState::new(store, orchestrator, config);

    let port = std::env::var("VASARI_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, requests_per_minute = per_minute.get(), "Vasari server listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
