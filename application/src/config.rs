//! Application-level configuration.
//!
//! Controls how the assistant behaves once its runtime is loaded.

use assistant_domain::ModelId;
use std::time::Duration;

/// Prompt prepended to every conversation unless configured otherwise
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant for a collaborative \
no-code database. Answer questions about databases, tables, fields, views and automations \
in the user's workspace. Be concise.";

/// Assistant behavior configuration.
#[derive(Debug, Clone)]
pub struct AssistantSettings {
    /// Model every chat talks to
    pub model: ModelId,
    /// System prompt prepended to every conversation
    pub system_prompt: String,
    /// Number of previous messages sent along with a new question
    pub history_limit: usize,
    /// Maximum time to wait for a reply before timing out.
    pub timeout: Option<Duration>,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            history_limit: 20,
            timeout: None,
        }
    }
}

impl AssistantSettings {
    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = model;
        self
    }

    /// Sets the reply timeout in seconds; `None` disables it.
    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }
}
