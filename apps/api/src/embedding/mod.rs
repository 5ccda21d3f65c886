//! Embedding client. The only place text is turned into vectors.
//!
//! Backends implement [`Embedder`] and are carried in `AppState` as
//! `Arc<dyn Embedder>`, chosen at startup from `EMBEDDING_URL`.

use async_trait::async_trait;
use thiserror::Error;

pub mod hashing;
pub mod http;

pub use hashing::HashingEmbedder;
pub use http::HttpEmbedder;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("embedding backend returned no vectors")]
    EmptyResponse,

    #[error("embedding dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

#[async_trait]
pub trait Embedder: Send + Sync {
    /// Encodes `text` into a fixed-length vector.
    async fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Short backend label for logs.
    fn backend(&self) -> &str;
}

/// Cosine similarity in [-1, 1]. A zero vector is dissimilar to everything.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let xf = f64::from(x);
        let yf = f64::from(y);
        dot += xf * yf;
        norm_a += xf * xf;
        norm_b += yf * yf;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(((dot / (norm_a.sqrt() * norm_b.sqrt())) as f32).clamp(-1.0, 1.0))
}
