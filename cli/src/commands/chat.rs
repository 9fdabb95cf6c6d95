//! # Chat Command
//!
//! Interactive conversation loop. The session keeps the full history in
//! memory; `clear` resets it to the system prompt and `exit` quits. Nothing
//! persists across runs.
//!
//! ## Usage
//!
//! ```bash
//! campusbot chat
//! ```

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use campusbot_rag::chat::OpenAiChatClient;
use campusbot_rag::corpus;
use campusbot_rag::embeddings::OpenAiProvider;
use campusbot_rag::respond::{respond, RespondConfig};
use campusbot_rag::session::ChatSession;
use campusbot_rag::store::PineconeIndex;

use crate::config::Config;
use crate::errors::{display_config_error, display_error, display_info};
use crate::exit_codes::*;

/// Arguments for the chat command
pub struct ChatArgs {
    /// Nearest neighbors requested from the index
    pub top_k: usize,
    /// Enable verbose output
    pub verbose: bool,
}

/// Execute the chat command
pub async fn execute(args: ChatArgs) -> Result<i32> {
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
        log::debug!("Chat model: {}", config.chat_model);
    }

    let mut session = ChatSession::new(corpus::system_prompt());
    let respond_config = RespondConfig {
        top_k: args.top_k,
        ..RespondConfig::default()
    };

    display_info("Ask about courses, fees, jobs, or locations. Type 'clear' to reset, 'exit' to quit.");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("{} ", "you>".cyan().bold());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF, e.g. piped input ran out
            break;
        }
        let message = line.trim();

        match message {
            "" => continue,
            "exit" | "quit" => break,
            "clear" => {
                session.reset();
                display_info("Conversation cleared.");
                continue;
            }
            _ => {}
        }

        match respond(
            &provider,
            &index,
            &chat,
            &mut session,
            message,
            &respond_config,
        )
        .await
        {
            Ok(reply) => println!("{} {}", "bot>".green().bold(), reply),
            // The failed exchange is not recorded; the session is intact.
            Err(e) => display_error(&e.to_string()),
        }
    }

    Ok(EXIT_SUCCESS)
}
