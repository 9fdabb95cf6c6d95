//! Embedding provider trait and OpenAI implementation.
//!
//! One request per call, order-preserving, no retry and no caching:
//! repeated identical texts re-embed and failures are the caller's to
//! handle.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RagError;

/// Trait for embedding providers that convert text to vectors.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RagError> {
        let results = self.embed_batch(&[text.to_string()]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| RagError::Embedding("Empty response from provider".to_string()))
    }

    /// Generate embeddings for a batch of texts, one vector per input,
    /// in input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, RagError>;

    /// Return the dimensionality of embeddings produced.
    fn dimensions(&self) -> usize;

    /// Return the model name.
    fn model_name(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// OpenAI embedding provider.
///
/// Works with OpenAI's API and any compatible endpoint.
pub struct OpenAiProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    dims: usize,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider.
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `model` - Model name (e.g., "text-embedding-ada-002")
    /// * `endpoint` - API endpoint (defaults to "https://api.openai.com/v1")
    /// * `dims` - Embedding dimensions (1536 for text-embedding-ada-002)
    pub fn new(
        api_key: String,
        model: String,
        endpoint: Option<String>,
        dims: Option<usize>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            api_key,
            model,
            dims: dims.unwrap_or(1536),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, RagError> {
        let url = format!("{}/embeddings", self.endpoint);
        let request = EmbeddingRequest {
            model: self.model.clone(),
            input: texts.to_vec(),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RagError::Embedding(format!(
                "OpenAI API error {status}: {body}"
            )));
        }

        let result: EmbeddingResponse = response.json().await?;
        if result.data.len() != texts.len() {
            return Err(RagError::Embedding(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                result.data.len()
            )));
        }
        Ok(result.data.into_iter().map(|d| d.embedding).collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
