//! Vector index adapters.
//!
//! The index itself is external: [`PineconeIndex`] wraps a managed
//! Pinecone-style service over HTTP. [`MemoryIndex`] provides the same
//! trait over an in-process cosine index for tests and offline runs.
//!
//! Both support upsert-by-id (insert-or-overwrite, idempotent per id) and
//! nearest-neighbor query returning up to `top_k` matches in descending
//! score order. Neither filters by category; that is the retriever's job.

mod memory;
mod pinecone;

pub use memory::MemoryIndex;
pub use pinecone::PineconeIndex;

use async_trait::async_trait;

use crate::error::RagError;
use crate::types::{IndexEntry, QueryMatch};

/// A vector index supporting upsert-by-id and similarity query.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Insert or overwrite entries keyed by id. Re-upserting an id
    /// replaces its vector and metadata.
    async fn upsert(&self, entries: &[IndexEntry]) -> Result<(), RagError>;

    /// Return up to `top_k` nearest entries by the index's similarity
    /// metric, descending score order, with metadata when requested.
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<QueryMatch>, RagError>;
}
