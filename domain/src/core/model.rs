//! Model identifier value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Model used by the assistant runtime (Value Object)
///
/// Written as `provider/model` (e.g. `openai/gpt-4o-mini`). The provider part
/// is optional; a bare model name is routed by the runtime's routing table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId {
    provider: Option<String>,
    name: String,
}

impl ModelId {
    pub fn new(provider: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            provider: provider.map(str::to_string),
            name: name.into(),
        }
    }

    /// Provider prefix, if the id carried one
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Model name without the provider prefix
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for ModelId {
    /// Returns the default assistant model (`openai/gpt-4o-mini`)
    fn default() -> Self {
        Self::new(Some("openai"), "gpt-4o-mini")
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.provider {
            Some(provider) => write!(f, "{}/{}", provider, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl std::str::FromStr for ModelId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (provider, name) = match s.split_once('/') {
            Some((provider, name)) => (Some(provider.trim()), name.trim()),
            None => (None, s),
        };

        if name.is_empty() || provider.is_some_and(str::is_empty) {
            return Err(DomainError::InvalidModel(s.to_string()));
        }

        Ok(Self::new(provider.map(|p| p.to_ascii_lowercase()).as_deref(), name))
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
