use std::sync::Arc;

use crate::config::Config;
use crate::embedding::Embedder;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable embedding backend. Default: HashingEmbedder. Swap via EMBEDDING_URL.
    pub embedder: Arc<dyn Embedder>,
}
