/// LLM Client — the single point of entry for all completion API calls.
///
/// No other module may call the provider directly. Handlers depend on the
/// `CompletionProvider` trait; `GroqClient` is the production implementation
/// against an OpenAI-compatible chat-completions endpoint.
///
/// One request per call: no retries, no streaming, no batching.
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Sends a rendered prompt to a completion model and returns its raw text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Content of the first choice, or an empty string when the provider sent none.
    pub fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Completion client for the Groq chat-completions API.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GroqClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .context("Failed to build HTTP client")?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!(
                "{}/chat/completions",
                config.api_base_url.trim_end_matches('/')
            ),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: provider_error_message(body),
            });
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(usage) = &chat.usage {
            debug!(
                "Completion succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                self.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat.into_text())
    }
}

/// Pulls `error.message` out of a provider error body, falling back to the raw body.
fn provider_error_message(body: String) -> String {
    serde_json::from_str::<ProviderError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
