//! HTTP adapter for a managed Pinecone-style vector index.
//!
//! Each upsert and query is a single atomic call; there are no
//! partial-success semantics and no retry. Connection and API failures
//! surface as [`RagError::Store`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RagError;
use crate::store::VectorIndex;
use crate::types::{Category, IndexEntry, QueryMatch};

/// Metadata stored alongside each vector.
#[derive(Debug, Serialize, Deserialize)]
struct EntryMetadata {
    #[serde(rename = "type")]
    category: Category,
    text: String,
}

#[derive(Debug, Serialize)]
struct UpsertVector {
    id: String,
    values: Vec<f32>,
    metadata: EntryMetadata,
}

#[derive(Debug, Serialize)]
struct UpsertRequest {
    vectors: Vec<UpsertVector>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest {
    vector: Vec<f32>,
    top_k: usize,
    include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<MatchEntry>,
}

#[derive(Debug, Deserialize)]
struct MatchEntry {
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Option<EntryMetadata>,
}

/// Client for a managed Pinecone-style index.
pub struct PineconeIndex {
    client: reqwest::Client,
    host: String,
    api_key: String,
}

impl PineconeIndex {
    /// Create a client for the index reachable at `host`
    /// (e.g., "https://cstu-bot-abc123.svc.us-east-1.pinecone.io").
    pub fn new(host: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            host: host.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, RagError> {
        let url = format!("{}/{}", self.host, path);
        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| RagError::Store(format!("Request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RagError::Store(format!(
                "Vector index error {status}: {body}"
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl VectorIndex for PineconeIndex {
    async fn upsert(&self, entries: &[IndexEntry]) -> Result<(), RagError> {
        if entries.is_empty() {
            return Ok(());
        }

        let request = UpsertRequest {
            vectors: entries
                .iter()
                .map(|e| UpsertVector {
                    id: e.id.clone(),
                    values: e.vector.clone(),
                    metadata: EntryMetadata {
                        category: e.category,
                        text: e.text.clone(),
                    },
                })
                .collect(),
        };

        self.post_json("vectors/upsert", &request).await?;
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<QueryMatch>, RagError> {
        let request = QueryRequest {
            vector: vector.to_vec(),
            top_k,
            include_metadata,
        };

        let response = self.post_json("query", &request).await?;
        let result: QueryResponse = response
            .json()
            .await
            .map_err(|e| RagError::Store(format!("Failed to parse query response: {e}")))?;

        // Matches without metadata cannot be routed and are dropped.
        Ok(result
            .matches
            .into_iter()
            .filter_map(|m| {
                m.metadata.map(|meta| QueryMatch {
                    id: m.id,
                    score: m.score,
                    category: meta.category,
                    text: meta.text,
                })
            })
            .collect())
    }
}
