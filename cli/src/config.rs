//! # Configuration Management
//!
//! This module loads CLI configuration from the environment, including the
//! OpenAI and Pinecone credentials and the model overrides.
//!
//! ## Environment Variables
//!
//! - `OPENAI_API_KEY` (required) - OpenAI API key for embeddings and chat
//! - `PINECONE_API_KEY` (required) - Pinecone API key for the vector index
//! - `CAMPUSBOT_PINECONE_HOST` - Pinecone index host URL
//! - `CAMPUSBOT_EMBED_MODEL` - Embedding model (default: text-embedding-ada-002)
//! - `CAMPUSBOT_CHAT_MODEL` - Chat model (default: gpt-4)
//! - `CAMPUSBOT_OPENAI_BASE_URL` - OpenAI-compatible endpoint override
//!
//! A `.env` file in the working directory is loaded first if present.

use anyhow::{Context, Result};

/// Default embedding model
const DEFAULT_EMBED_MODEL: &str = "text-embedding-ada-002";

/// Default chat model
const DEFAULT_CHAT_MODEL: &str = "gpt-4";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key
    pub openai_api_key: String,
    /// Pinecone API key
    pub pinecone_api_key: String,
    /// Pinecone index host URL, required by commands that touch the index
    pub pinecone_host: Option<String>,
    /// Embedding model name
    pub embed_model: String,
    /// Chat model name
    pub chat_model: String,
    /// OpenAI-compatible endpoint override
    pub openai_base_url: Option<String>,
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    ///
    /// Fails with a clear diagnostic when a required credential is missing.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY is not set; export it or add it to .env")?;
        let pinecone_api_key = std::env::var("PINECONE_API_KEY")
            .context("PINECONE_API_KEY is not set; export it or add it to .env")?;

        Ok(Self {
            openai_api_key,
            pinecone_api_key,
            pinecone_host: std::env::var("CAMPUSBOT_PINECONE_HOST").ok(),
            embed_model: std::env::var("CAMPUSBOT_EMBED_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBED_MODEL.to_string()),
            chat_model: std::env::var("CAMPUSBOT_CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            openai_base_url: std::env::var("CAMPUSBOT_OPENAI_BASE_URL").ok(),
        })
    }

    /// The Pinecone index host, for commands that reach the remote index.
    pub fn require_pinecone_host(&self) -> Result<&str> {
        self.pinecone_host.as_deref().context(
            "CAMPUSBOT_PINECONE_HOST is not set; set it to your Pinecone index host URL",
        )
    }

    /// Get a masked version of the OpenAI API key for display
    pub fn masked_openai_key(&self) -> String {
        mask_key(&self.openai_api_key)
    }

    /// Get a masked version of the Pinecone API key for display
    pub fn masked_pinecone_key(&self) -> String {
        mask_key(&self.pinecone_api_key)
    }
}

fn mask_key(key: &str) -> String {
    if key.len() > 8 {
        format!("{}...{}", &key[..4], &key[key.len() - 4..])
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_host(host: Option<&str>) -> Config {
        Config {
            openai_api_key: "sk-test-1234567890".to_string(),
            pinecone_api_key: "pc".to_string(),
            pinecone_host: host.map(|h| h.to_string()),
            embed_model: DEFAULT_EMBED_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            openai_base_url: None,
        }
    }

    #[test]
    fn test_masked_key_shows_edges_only() {
        let config = config_with_host(None);
        let masked = config.masked_openai_key();
        assert_eq!(masked, "sk-t...7890");
        assert!(!masked.contains("1234567890"));
    }

    #[test]
    fn test_short_key_fully_masked() {
        let config = config_with_host(None);
        assert_eq!(config.masked_pinecone_key(), "****");
    }

    #[test]
    fn test_require_pinecone_host_names_the_variable() {
        let config = config_with_host(None);
        let err = config.require_pinecone_host().unwrap_err();
        assert!(err.to_string().contains("CAMPUSBOT_PINECONE_HOST"));
    }

    #[test]
    fn test_require_pinecone_host_returns_host() {
        let config = config_with_host(Some("https://cstu-bot.svc.pinecone.io"));
        assert_eq!(
            config.require_pinecone_host().unwrap(),
            "https://cstu-bot.svc.pinecone.io"
        );
    }
}
