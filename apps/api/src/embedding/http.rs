use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embedding::{Embedder, EmbeddingError};

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for an OpenAI-compatible `/embeddings` endpoint
/// (text-embeddings-inference, vLLM, OpenAI, ...). One attempt per call.
#[derive(Clone)]
pub struct HttpEmbedder {
    client: Client,
    url: String,
    model: String,
    api_key: Option<String>,
}

impl HttpEmbedder {
    pub fn new(
        url: String,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, EmbeddingError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            model,
            api_key,
        })
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = EmbeddingRequest {
            model: &self.model,
            input: [text],
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: EmbeddingResponse = serde_json::from_slice(&bytes)?;
        let embedding = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .filter(|e| !e.is_empty())
            .ok_or(EmbeddingError::EmptyResponse)?;

        debug!(
            "Embedding call succeeded: chars={}, dims={}",
            text.len(),
            embedding.len()
        );

        Ok(embedding)
    }

    fn backend(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = EmbeddingRequest {
            model: "all-MiniLM-L6-v2",
            input: ["hello"],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"model": "all-MiniLM-L6-v2", "input": ["hello"]})
        );
    }

    #[test]
    fn test_response_parses_first_vector() {
        let json = r#"{"object":"list","data":[{"object":"embedding","index":0,"embedding":[0.1,0.2]}],"model":"m"}"#;
        let parsed: EmbeddingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data[0].embedding, vec![0.1, 0.2]);
    }

    #[test]
    fn test_error_body_parses_message() {
        let json = r#"{"error":{"message":"model not loaded","type":"server_error"}}"#;
        let parsed: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "model not loaded");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        let embedder = HttpEmbedder::new(
            "http://127.0.0.1:9/embeddings".to_string(),
            "m".to_string(),
            None,
            Duration::from_secs(2),
        )
        .unwrap();
        let err = embedder.encode("text").await.unwrap_err();
        assert!(matches!(err, EmbeddingError::Http(_)));
    }
}
