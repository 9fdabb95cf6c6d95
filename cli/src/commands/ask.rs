//! # Ask Command
//!
//! Answers a single question and exits. Routed questions are answered from
//! the vector index; everything else goes to the chat model.
//!
//! ## Usage
//!
//! ```bash
//! # Ask about a course
//! campusbot ask "Which class teaches Python?"
//!
//! # Widen the retrieval window
//! campusbot ask "What fees do international students pay?" --top-k 10
//! ```

use anyhow::Result;

use campusbot_rag::chat::OpenAiChatClient;
use campusbot_rag::corpus;
use campusbot_rag::embeddings::OpenAiProvider;
use campusbot_rag::respond::{respond, RespondConfig};
use campusbot_rag::session::ChatSession;
use campusbot_rag::store::PineconeIndex;
use campusbot_rag::RagError;

use crate::config::Config;
use crate::errors::{display_config_error, display_error, display_network_error};
use crate::exit_codes::*;

/// Arguments for the ask command
pub struct AskArgs {
    /// The question to answer
    pub question: String,
    /// Nearest neighbors requested from the index
    pub top_k: usize,
    /// Enable verbose output
    pub verbose: bool,
}

/// Execute the ask command
pub async fn execute(args: AskArgs) -> Result<i32> {
    if args.top_k == 0 {
        display_error("--top-k must be at least 1");
        return Ok(EXIT_INVALID_INPUT);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            display_config_error(&format!("{e:#}"));
            return Ok(EXIT_CONFIG_ERROR);
        }
    };
    let host = match config.require_pinecone_host() {
        Ok(host) => host.to_string(),
        Err(e) => {
            display_config_error(&format!("{e:#}"));
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let provider = OpenAiProvider::new(
        config.openai_api_key.clone(),
        config.embed_model.clone(),
        config.openai_base_url.clone(),
        None,
    );
    let index = PineconeIndex::new(host, config.pinecone_api_key.clone());
    let chat = OpenAiChatClient::new(
        config.openai_api_key.clone(),
        config.chat_model.clone(),
        config.openai_base_url.clone(),
    );

    if args.verbose {
        log::debug!(
            "Asking with embed model '{}' and chat model '{}'",
            config.embed_model,
            config.chat_model
        );
    }

    let mut session = ChatSession::new(corpus::system_prompt());
    let respond_config = RespondConfig {
        top_k: args.top_k,
        ..RespondConfig::default()
    };

    match respond(
        &provider,
        &index,
        &chat,
        &mut session,
        &args.question,
        &respond_config,
    )
    .await
    {
        Ok(reply) => {
            println!("{reply}");
            Ok(EXIT_SUCCESS)
        }
        Err(e) => Ok(exit_code_for(&e)),
    }
}

/// Map a library error to an exit code, displaying it along the way.
pub(crate) fn exit_code_for(error: &RagError) -> i32 {
    match error {
        RagError::Embedding(_)
        | RagError::Store(_)
        | RagError::Completion(_)
        | RagError::Http(_) => {
            display_network_error(&error.to_string());
            EXIT_NETWORK_ERROR
        }
        RagError::Config(_) => {
            display_config_error(&error.to_string());
            EXIT_CONFIG_ERROR
        }
        _ => {
            display_error(&error.to_string());
            EXIT_ERROR
        }
    }
}
