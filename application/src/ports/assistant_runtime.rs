//! Assistant runtime port
//!
//! The runtime is the heavyweight part of the assistant: model routing and
//! the provider clients that actually produce replies. It is only ever
//! obtained through a [`CapabilityFactory`](super::capability_factory::CapabilityFactory).

use assistant_domain::ModelId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while the runtime produces a reply
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Role of a prompt message sent to the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

/// A message in the prompt sent to the runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::Assistant,
            content: content.into(),
        }
    }
}

/// A constructed assistant runtime
///
/// Once loaded, a runtime is shared by every request of the process and
/// must be safe for concurrent use.
#[async_trait]
pub trait AssistantRuntime: Send + Sync {
    /// Short description used in logs and status output
    fn name(&self) -> &str;

    /// Produce the assistant reply for a conversation
    async fn complete(
        &self,
        model: &ModelId,
        messages: &[PromptMessage],
    ) -> Result<String, RuntimeError>;
}
