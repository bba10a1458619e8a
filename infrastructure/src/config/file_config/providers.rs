//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the API (any OpenAI-compatible endpoint works).
    pub base_url: String,
    /// Default max tokens per response.
    pub max_tokens: u32,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            max_tokens: 4096,
            timeout_seconds: 120,
        }
    }
}

impl FileOpenAiConfig {
    /// API key from the config file or, failing that, the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

/// Provider settings of the assistant runtime.
///
/// # Example
///
/// ```toml
/// [providers]
/// default = "openai"
/// echo = false
///
/// [providers.routing]
/// "llama3" = "openai"
///
/// [providers.openai]
/// base_url = "http://localhost:11434"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Default provider: "openai" or "echo".
    pub default: Option<String>,
    /// Enable the offline echo provider.
    pub echo: bool,
    /// OpenAI-compatible API settings.
    pub openai: FileOpenAiConfig,
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
}
