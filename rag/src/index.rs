//! Index building: embed each corpus record and upsert it into the
//! vector index.
//!
//! One embedding call and one upsert per record, mirroring the records'
//! independence: under the default policy a failing record is reported
//! and skipped, and already-upserted entries are left in place (no
//! rollback). Re-running re-embeds and overwrites every record.

use log::{info, warn};

use crate::embeddings::EmbeddingProvider;
use crate::error::RagError;
use crate::store::VectorIndex;
use crate::types::{CorpusRecord, IndexEntry};

/// What to do when a single record fails to embed or upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// Record the failure and keep going (default).
    #[default]
    ContinueOnError,
    /// Abort the build on the first failure.
    FailFast,
}

/// Outcome of an index build.
#[derive(Debug, Default)]
pub struct IndexReport {
    /// Number of records successfully upserted.
    pub indexed: usize,
    /// Records that failed, with the error message for each.
    pub failures: Vec<(String, String)>,
}

impl IndexReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Embed and upsert every record in `records`.
pub async fn build_index(
    provider: &dyn EmbeddingProvider,
    index: &dyn VectorIndex,
    records: &[CorpusRecord],
    policy: IndexPolicy,
) -> Result<IndexReport, RagError> {
    let mut report = IndexReport::default();

    for record in records {
        match index_record(provider, index, record).await {
            Ok(()) => {
                info!("Indexed '{}' from {}", record.id, record.category);
                report.indexed += 1;
            }
            Err(e) => match policy {
                IndexPolicy::ContinueOnError => {
                    warn!("Skipping '{}': {}", record.id, e);
                    report.failures.push((record.id.clone(), e.to_string()));
                }
                IndexPolicy::FailFast => return Err(e),
            },
        }
    }

    Ok(report)
}

async fn index_record(
    provider: &dyn EmbeddingProvider,
    index: &dyn VectorIndex,
    record: &CorpusRecord,
) -> Result<(), RagError> {
    let vector = provider.embed(&record.text).await?;
    let entry = IndexEntry {
        id: record.id.clone(),
        vector,
        category: record.category,
        text: record.text.clone(),
    };
    index.upsert(std::slice::from_ref(&entry)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryIndex;
    use crate::types::Category;
    use async_trait::async_trait;

    struct HashEmbedder {
        /// Texts that fail to embed, for exercising the error policy.
        poisoned: Vec<String>,
    }

    impl HashEmbedder {
        fn new() -> Self {
            Self { poisoned: Vec::new() }
        }

        fn poisoning(texts: &[&str]) -> Self {
            Self {
                poisoned: texts.iter().map(|t| t.to_string()).collect(),
            }
        }
    }

    fn hash_embed(text: &str) -> Vec<f32> {
        let mut v = vec![0.0f32; 8];
        for (i, b) in text.to_lowercase().bytes().enumerate() {
            v[(b as usize + i) % 8] += 1.0;
        }
        v
    }

    #[async_trait]
    impl EmbeddingProvider for HashEmbedder {
        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, RagError> {
            for text in texts {
                if self.poisoned.contains(text) {
                    return Err(RagError::Embedding("simulated failure".to_string()));
                }
            }
            Ok(texts.iter().map(|t| hash_embed(t)).collect())
        }

        fn dimensions(&self) -> usize {
            8
        }

        fn model_name(&self) -> &str {
            "hash-embedder"
        }
    }

    fn record(id: &str, category: Category, text: &str) -> CorpusRecord {
        CorpusRecord {
            id: id.to_string(),
            category,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_build_index_indexes_all_records() {
        let index = MemoryIndex::new();
        let records = crate::corpus::load().unwrap();

        let report = build_index(&HashEmbedder::new(), &index, &records, IndexPolicy::default())
            .await
            .unwrap();

        assert!(report.is_complete());
        assert_eq!(report.indexed, records.len());
        assert_eq!(index.len().await, records.len());
    }

    #[tokio::test]
    async fn test_self_retrieval_after_build() {
        let index = MemoryIndex::new();
        let provider = HashEmbedder::new();
        let records = crate::corpus::load().unwrap();
        build_index(&provider, &index, &records, IndexPolicy::default())
            .await
            .unwrap();

        for record in &records {
            let matches = crate::retrieval::retrieve(
                &provider,
                &index,
                &record.text,
                record.category,
                crate::retrieval::DEFAULT_TOP_K,
            )
            .await
            .unwrap();
            assert!(
                matches.iter().any(|m| m.id == record.id),
                "self-retrieval failed for '{}'",
                record.id
            );
        }
    }

    #[tokio::test]
    async fn test_continue_on_error_skips_and_reports() {
        let index = MemoryIndex::new();
        let provider = HashEmbedder::poisoning(&["bad text"]);
        let records = vec![
            record("good-1", Category::Course, "first course"),
            record("bad", Category::Course, "bad text"),
            record("good-2", Category::Course, "second course"),
        ];

        let report = build_index(&provider, &index, &records, IndexPolicy::ContinueOnError)
            .await
            .unwrap();

        assert_eq!(report.indexed, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, "bad");
        assert_eq!(index.len().await, 2);
    }

    #[tokio::test]
    async fn test_fail_fast_aborts_keeping_prior_entries() {
        let index = MemoryIndex::new();
        let provider = HashEmbedder::poisoning(&["bad text"]);
        let records = vec![
            record("good-1", Category::Course, "first course"),
            record("bad", Category::Course, "bad text"),
            record("good-2", Category::Course, "second course"),
        ];

        let err = build_index(&provider, &index, &records, IndexPolicy::FailFast)
            .await
            .unwrap_err();
        assert!(matches!(err, RagError::Embedding(_)));
        // No rollback: the record indexed before the failure stays.
        assert_eq!(index.len().await, 1);
    }

    #[tokio::test]
    async fn test_rebuild_overwrites() {
        let index = MemoryIndex::new();
        let provider = HashEmbedder::new();

        build_index(
            &provider,
            &index,
            &[record("a", Category::Faq, "old answer")],
            IndexPolicy::default(),
        )
        .await
        .unwrap();
        build_index(
            &provider,
            &index,
            &[record("a", Category::Faq, "new answer")],
            IndexPolicy::default(),
        )
        .await
        .unwrap();

        assert_eq!(index.len().await, 1);
        let matches = index.query(&hash_embed("new answer"), 1, true).await.unwrap();
        assert_eq!(matches[0].text, "new answer");
    }
}
