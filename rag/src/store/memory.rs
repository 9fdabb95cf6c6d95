//! In-process cosine-similarity index.
//!
//! Backs tests and offline runs with the same trait as the managed index.
//! Not an engineered ANN structure: a linear scan is plenty for a corpus
//! of this size.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::RagError;
use crate::store::VectorIndex;
use crate::types::{Category, IndexEntry, QueryMatch};

struct StoredEntry {
    vector: Vec<f32>,
    category: Category,
    text: String,
}

/// An in-memory vector index keyed by id.
#[derive(Default)]
pub struct MemoryIndex {
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorIndex for MemoryIndex {
    async fn upsert(&self, entries: &[IndexEntry]) -> Result<(), RagError> {
        let mut map = self.entries.write().await;
        for entry in entries {
            map.insert(
                entry.id.clone(),
                StoredEntry {
                    vector: entry.vector.clone(),
                    category: entry.category,
                    text: entry.text.clone(),
                },
            );
        }
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        _include_metadata: bool,
    ) -> Result<Vec<QueryMatch>, RagError> {
        let map = self.entries.read().await;
        let mut matches: Vec<QueryMatch> = map
            .iter()
            .map(|(id, entry)| QueryMatch {
                id: id.clone(),
                score: cosine_similarity(vector, &entry.vector),
                category: entry.category,
                text: entry.text.clone(),
            })
            .collect();

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        matches.truncate(top_k);
        Ok(matches)
    }
}
