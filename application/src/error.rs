//! Application error taxonomy
//!
//! Every operation of the [`AssistantHandler`](crate::AssistantHandler) and
//! the [`Assistant`](crate::Assistant) fails with an [`AssistantError`].
//! Load failures of the runtime get their own variant so callers can show
//! "assistant unavailable" instead of treating them as generic faults.

use crate::ports::assistant_runtime::RuntimeError;
use crate::ports::capability_factory::CapabilityLoadError;
use crate::ports::chat_repository::RepositoryError;
use crate::ports::license::LicenseError;
use assistant_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by assistant operations
#[derive(Error, Debug)]
pub enum AssistantError {
    /// The assistant runtime could not be loaded
    #[error("Assistant is unavailable: {0}")]
    CapabilityUnavailable(String),

    /// Unknown chat, or a chat owned by someone else
    #[error("Not found: {0}")]
    NotFound(String),

    /// License or permission check failed
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// The runtime was loaded but failed to produce a reply
    #[error("Assistant runtime error: {0}")]
    Runtime(String),
}

impl AssistantError {
    /// Whether this error means the runtime could not be loaded
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AssistantError::CapabilityUnavailable(_))
    }
}

impl From<CapabilityLoadError> for AssistantError {
    fn from(err: CapabilityLoadError) -> Self {
        AssistantError::CapabilityUnavailable(err.to_string())
    }
}

impl From<RepositoryError> for AssistantError {
    fn from(err: RepositoryError) -> Self {
        match &err {
            RepositoryError::ChatNotFound(_) => AssistantError::NotFound(err.to_string()),
            RepositoryError::Storage(msg) => AssistantError::Storage(msg.clone()),
        }
    }
}

impl From<LicenseError> for AssistantError {
    fn from(err: LicenseError) -> Self {
        AssistantError::PermissionDenied(err.to_string())
    }
}

impl From<RuntimeError> for AssistantError {
    fn from(err: RuntimeError) -> Self {
        AssistantError::Runtime(err.to_string())
    }
}

impl From<DomainError> for AssistantError {
    fn from(err: DomainError) -> Self {
        AssistantError::InvalidInput(err.to_string())
    }
}
