//! Chat completion client for the composer's fallback path.
//!
//! A single request/response call seeded with the full conversation; no
//! streaming, no retry. Works with OpenAI's API and any compatible
//! endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RagError;
use crate::types::ChatTurn;

/// Trait for chat completion providers.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a completion for the given conversation at the given
    /// sampling temperature.
    async fn complete(&self, turns: &[ChatTurn], temperature: f32) -> Result<String, RagError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// OpenAI chat completion client.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiChatClient {
    /// Create a new chat client.
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `model` - Model name (e.g., "gpt-4")
    /// * `endpoint` - API endpoint (defaults to "https://api.openai.com/v1")
    pub fn new(api_key: String, model: String, endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiChatClient {
    async fn complete(&self, turns: &[ChatTurn], temperature: f32) -> Result<String, RagError> {
        let url = format!("{}/chat/completions", self.endpoint);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: turns
                .iter()
                .map(|t| ChatMessage {
                    role: t.role.as_str().to_string(),
                    content: t.content.clone(),
                })
                .collect(),
            temperature: f64::from(temperature),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Completion(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(RagError::Completion(format!("API error {status}: {message}")));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| RagError::Completion(format!("Failed to parse response: {e}")))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                RagError::Completion(format!("No response content from model '{}'", self.model))
            })
    }
}
