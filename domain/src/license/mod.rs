//! Licensed features.
//!
//! Some functionality is only available to workspaces covered by a
//! license. The assistant itself is one of those features.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A feature that can be gated by a license (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// The AI assistant
    Assistant,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Assistant => "assistant",
        }
    }

    /// Features granted by an enterprise license
    pub fn enterprise() -> &'static [Feature] {
        &[Feature::Assistant]
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Feature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assistant" => Ok(Feature::Assistant),
            other => Err(DomainError::UnknownFeature(other.to_string())),
        }
    }
}
