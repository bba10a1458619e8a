//! Provider adapters of the assistant runtime.
//!
//! A provider turns a prompt into a reply for one model family. The
//! [`routing::ModelRouter`] picks the provider for each request.

pub mod echo;
#[cfg(feature = "runtime")]
pub mod openai;
pub mod routing;

use assistant_application::{PromptMessage, RuntimeError};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAi,
    Echo,
}

impl ProviderKind {
    /// Parse a provider name as written in config and model ids
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "openai" => Some(ProviderKind::OpenAi),
            "echo" => Some(ProviderKind::Echo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Echo => "echo",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Produce a reply with the provider-local model name (no prefix)
    async fn complete(&self, model: &str, messages: &[PromptMessage])
    -> Result<String, RuntimeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(ProviderKind::from_name("OpenAI"), Some(ProviderKind::OpenAi));
        assert_eq!(ProviderKind::from_name(" echo "), Some(ProviderKind::Echo));
        assert_eq!(ProviderKind::from_name("bedrock"), None);
    }
}
