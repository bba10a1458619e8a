//! Offline provider that echoes the last user message.
//!
//! Useful for local setups and demos where no model API is reachable.

use super::{ProviderAdapter, ProviderKind};
use assistant_application::{PromptMessage, PromptRole, RuntimeError};
use async_trait::async_trait;

pub struct EchoProvider;

#[async_trait]
impl ProviderAdapter for EchoProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Echo
    }

    async fn complete(
        &self,
        model: &str,
        messages: &[PromptMessage],
    ) -> Result<String, RuntimeError> {
        let question = messages
            .iter()
            .rev()
            .find(|m| m.role == PromptRole::User)
            .map(|m| m.content.as_str())
            .ok_or_else(|| RuntimeError::RequestFailed("no user message to echo".to_string()))?;
        Ok(format!("[{}] {}", model, question))
    }
}
