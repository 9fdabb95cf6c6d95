//! Nearest-neighbor retrieval scoped to a category.
//!
//! Embeds the query, asks the index for the `top_k` nearest entries, then
//! discards matches from other categories. The `top_k` cutoff happens
//! BEFORE the category filter: zero post-filter matches can remain even
//! when relevant entries exist past the cutoff. That precision/recall
//! trade-off is deliberate; switching to filter-then-limit would change
//! observable behavior.

use crate::embeddings::EmbeddingProvider;
use crate::error::RagError;
use crate::store::VectorIndex;
use crate::types::{Category, QueryMatch};

/// Default number of nearest neighbors requested from the index.
pub const DEFAULT_TOP_K: usize = 5;

/// Retrieve matches for `query` within `category`.
pub async fn retrieve(
    provider: &dyn EmbeddingProvider,
    index: &dyn VectorIndex,
    query: &str,
    category: Category,
    top_k: usize,
) -> Result<Vec<QueryMatch>, RagError> {
    let query_embedding = provider.embed(query).await?;
    let matches = index.query(&query_embedding, top_k, true).await?;

    Ok(matches
        .into_iter()
        .filter(|m| m.category == category)
        .collect())
}
