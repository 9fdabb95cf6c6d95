//! campusbot-rag: retrieval and routing core for the Campusbot assistant
//!
//! This crate provides the pipeline behind the chatbot:
//! - Embedding generation via an OpenAI-compatible API
//! - A vector index adapter (managed Pinecone-style index over HTTP, plus
//!   an in-memory index for tests and offline runs)
//! - Keyword routing of queries to corpus categories
//! - Nearest-neighbor retrieval with category filtering
//! - Response composition: templated retrieval answers or a chat
//!   completion seeded with the conversation history
//!
//! # Example
//!
//! ```ignore
//! use campusbot_rag::respond::{respond, RespondConfig};
//! use campusbot_rag::{corpus, session::ChatSession};
//!
//! let mut session = ChatSession::new(corpus::system_prompt());
//! let reply = respond(
//!     &provider,
//!     &index,
//!     &chat,
//!     &mut session,
//!     "Tell me about the Python class",
//!     &RespondConfig::default(),
//! )
//! .await?;
//! ```

pub mod chat;
pub mod corpus;
pub mod embeddings;
pub mod error;
pub mod index;
pub mod respond;
pub mod retrieval;
pub mod routing;
pub mod session;
pub mod store;
pub mod types;

pub use error::RagError;
pub use types::{Category, ChatRole, ChatTurn, CorpusRecord, IndexEntry, QueryMatch};
