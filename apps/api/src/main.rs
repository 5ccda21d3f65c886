mod config;
mod documents;
mod embedding;
mod errors;
mod extraction;
mod ranking;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::embedding::{Embedder, HashingEmbedder, HttpEmbedder};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume screener v{}", env!("CARGO_PKG_VERSION"));

    // Initialize embedding backend (shared, read-only for the process lifetime)
    let embedder = build_embedder(&config)?;
    info!("Embedding model loaded (backend: {})", embedder.backend());

    let state = AppState {
        config: config.clone(),
        embedder,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_embedder(config: &Config) -> Result<Arc<dyn Embedder>> {
    match &config.embedding_url {
        Some(url) => {
            info!("Loading embedding model {} from {url}", config.embedding_model);
            let embedder = HttpEmbedder::new(
                url.clone(),
                config.embedding_model.clone(),
                config.embedding_api_key.clone(),
                Duration::from_secs(config.embedding_timeout_secs),
            )?;
            Ok(Arc::new(embedder))
        }
        None => {
            info!(
                "EMBEDDING_URL not set; using local hashing embedder ({} dims)",
                config.embedding_dimensions
            );
            Ok(Arc::new(HashingEmbedder::new(config.embedding_dimensions)))
        }
    }
}
