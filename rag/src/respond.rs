//! Response composition.
//!
//! Per incoming message: route to a category and answer from retrieval,
//! or fall back to a general chat completion seeded with the full
//! conversation. In either branch the exchange is appended to the session
//! (user turn, then assistant turn) so history stays chronological. A
//! failed provider or store call propagates without touching the session.

use crate::chat::ChatProvider;
use crate::embeddings::EmbeddingProvider;
use crate::error::RagError;
use crate::retrieval::{self, DEFAULT_TOP_K};
use crate::routing;
use crate::session::ChatSession;
use crate::store::VectorIndex;
use crate::types::{Category, ChatTurn, QueryMatch};

/// Sampling temperature for the conversational fallback.
const CHAT_TEMPERATURE: f32 = 0.7;

/// Tuning knobs for response composition.
pub struct RespondConfig {
    /// Nearest neighbors requested from the index before filtering.
    pub top_k: usize,
    /// Temperature for the completion fallback.
    pub temperature: f32,
}

impl Default for RespondConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            temperature: CHAT_TEMPERATURE,
        }
    }
}

/// Compose a response to `message` and append the exchange to `session`.
pub async fn respond(
    embeddings: &dyn EmbeddingProvider,
    index: &dyn VectorIndex,
    chat: &dyn ChatProvider,
    session: &mut ChatSession,
    message: &str,
    config: &RespondConfig,
) -> Result<String, RagError> {
    let reply = match routing::classify(message) {
        Some(category) => {
            let matches =
                retrieval::retrieve(embeddings, index, message, category, config.top_k).await?;
            if matches.is_empty() {
                no_match_message(category)
            } else {
                render_matches(category, &matches)
            }
        }
        None => {
            // Unclassified: complete over the whole session plus the new
            // user turn.
            let mut turns = session.turns().to_vec();
            turns.push(ChatTurn::user(message));
            chat.complete(&turns, config.temperature).await?
        }
    };

    session.append_user(message);
    session.append_assistant(&reply);
    Ok(reply)
}

fn render_matches(category: Category, matches: &[QueryMatch]) -> String {
    let mut out = format!("I found some relevant information about {category}:\n");
    for m in matches {
        out.push_str(&format!("- {} (from {})\n", m.text, m.category));
    }
    out
}

fn no_match_message(category: Category) -> String {
    format!("I'm sorry, I couldn't find any relevant information about {category}.")
}
