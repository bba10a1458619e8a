//! Load state of the optional assistant runtime.
//!
//! The runtime is expensive to construct, so it starts out [`Unloaded`] and
//! moves to [`Loaded`] exactly once, on the first request that actually
//! needs it. There is no transition back.
//!
//! [`Unloaded`]: CapabilityState::Unloaded
//! [`Loaded`]: CapabilityState::Loaded

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observable state of a deferred capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CapabilityState {
    /// Not constructed yet (or every attempt so far failed)
    #[default]
    Unloaded,
    /// Constructed; `loaded_at` identifies the single load event
    Loaded { loaded_at: DateTime<Utc> },
}

impl CapabilityState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, CapabilityState::Loaded { .. })
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        match self {
            CapabilityState::Loaded { loaded_at } => Some(*loaded_at),
            CapabilityState::Unloaded => None,
        }
    }
}

impl std::fmt::Display for CapabilityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapabilityState::Unloaded => write!(f, "unloaded"),
            CapabilityState::Loaded { loaded_at } => {
                write!(f, "loaded at {}", loaded_at.to_rfc3339())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unloaded() {
        let state = CapabilityState::default();
        assert!(!state.is_loaded());
        assert_eq!(state.loaded_at(), None);
        assert_eq!(state.to_string(), "unloaded");
    }

    #[test]
    fn test_loaded_serializes_tagged() {
        let now = Utc::now();
        let state = CapabilityState::Loaded { loaded_at: now };
        assert_eq!(state.loaded_at(), Some(now));
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["state"], "loaded");
    }
}
