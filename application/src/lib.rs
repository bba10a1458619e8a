//! Application layer for workspace-assistant
//!
//! This crate contains the assistant handler, port definitions, and
//! application configuration. It depends only on the domain layer.
//!
//! The handler never constructs the assistant runtime itself; it asks the
//! injected [`CapabilityFactory`] on first genuine use.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AssistantSettings, DEFAULT_SYSTEM_PROMPT};
pub use error::AssistantError;
pub use ports::{
    assistant_runtime::{AssistantRuntime, PromptMessage, PromptRole, RuntimeError},
    capability_factory::{CapabilityFactory, CapabilityLoadError},
    chat_repository::{ChatRepository, RepositoryError},
    license::{LicenseError, LicensePort, UnrestrictedLicense},
};
pub use use_cases::{assistant::Assistant, assistant_handler::AssistantHandler};
