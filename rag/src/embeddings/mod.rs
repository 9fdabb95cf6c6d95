//! Embedding providers for generating vector representations of text.
//!
//! Supports OpenAI-compatible APIs for embedding generation.

mod provider;

pub use provider::{EmbeddingProvider, OpenAiProvider};
