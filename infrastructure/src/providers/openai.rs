//! OpenAI-compatible Chat Completions provider.
//!
//! Works against the OpenAI API and any server exposing the same
//! `/v1/chat/completions` endpoint. Only built with the `runtime` feature.

use super::{ProviderAdapter, ProviderKind};
use crate::config::FileOpenAiConfig;
use assistant_application::{PromptMessage, PromptRole, RuntimeError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    url: String,
    api_key: String,
    max_tokens: u32,
}

impl OpenAiCompatibleProvider {
    /// Build the HTTP client. This is the expensive part of loading the runtime.
    pub fn new(config: &FileOpenAiConfig, api_key: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("workspace-assistant/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: chat_completions_url(&config.base_url),
            api_key,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiCompatibleProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn complete(
        &self,
        model: &str,
        messages: &[PromptMessage],
    ) -> Result<String, RuntimeError> {
        let request = ChatCompletionRequest {
            model,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: role_name(m.role),
                    content: &m.content,
                })
                .collect(),
            max_tokens: self.max_tokens,
        };

        debug!(url = %self.url, model, messages = messages.len(), "Sending chat completion");
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RuntimeError::Timeout
                } else {
                    RuntimeError::RequestFailed(format!("Failed to reach provider: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RuntimeError::RequestFailed(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(RuntimeError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_message(&body)
            )));
        }

        parse_completion(&body)
    }
}

fn role_name(role: PromptRole) -> &'static str {
    match role {
        PromptRole::System => "system",
        PromptRole::User => "user",
        PromptRole::Assistant => "assistant",
    }
}

/// Chat completions URL for a base URL, with or without a trailing `/v1`.
fn chat_completions_url(base: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.ends_with("/v1") {
        format!("{}/chat/completions", base)
    } else {
        format!("{}/v1/chat/completions", base)
    }
}

fn parse_completion(body: &str) -> Result<String, RuntimeError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| RuntimeError::RequestFailed(format!("Malformed response: {}", e)))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| RuntimeError::RequestFailed("Response contained no message".to_string()))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}
