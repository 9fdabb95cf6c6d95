//! # Index Command
//!
//! Embeds every corpus record and upserts it into the vector index.
//!
//! ## Usage
//!
//! ```bash
//! # Build or rebuild the index, skipping records that fail
//! campusbot index
//!
//! # Abort on the first failing record
//! campusbot index --fail-fast
//! ```

use anyhow::Result;

use campusbot_rag::corpus;
use campusbot_rag::embeddings::OpenAiProvider;
use campusbot_rag::index::{build_index, IndexPolicy};
use campusbot_rag::store::PineconeIndex;

use crate::config::Config;
use crate::errors::{
    display_config_error, display_info, display_network_error, display_success, display_warning,
};
use crate::exit_codes::*;

/// Arguments for the index command
pub struct IndexArgs {
    /// Abort on the first record that fails to embed or upsert
    pub fail_fast: bool,
    /// Enable verbose output
    pub verbose: bool,
}

/// Execute the index command
pub async fn execute(args: IndexArgs) -> Result<i32> {
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

    let records = corpus::load()?;
    display_info(&format!(
        "Indexing {} corpus records with {}...",
        records.len(),
        config.embed_model
    ));
    if args.verbose {
        display_info(&format!("Using OpenAI key {}", config.masked_openai_key()));
    }

    let policy = if args.fail_fast {
        IndexPolicy::FailFast
    } else {
        IndexPolicy::ContinueOnError
    };

    match build_index(&provider, &index, &records, policy).await {
        Ok(report) if report.is_complete() => {
            display_success(&format!("Indexed {} records.", report.indexed));
            Ok(EXIT_SUCCESS)
        }
        Ok(report) => {
            for (id, error) in &report.failures {
                display_warning(&format!("'{id}' failed: {error}"));
            }
            display_warning(&format!(
                "Indexed {} records, {} failed.",
                report.indexed,
                report.failures.len()
            ));
            Ok(EXIT_PARTIAL_INDEX)
        }
        Err(e) => {
            display_network_error(&e.to_string());
            Ok(EXIT_NETWORK_ERROR)
        }
    }
}
