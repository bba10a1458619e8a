//! Capability factory port
//!
//! Constructing the assistant runtime is the expensive step the handler
//! defers. The factory is the only place that performs it, so "load on
//! demand" is a plain function call instead of an import side effect.

use super::assistant_runtime::AssistantRuntime;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Reasons the runtime could not be constructed
#[derive(Error, Debug)]
pub enum CapabilityLoadError {
    /// The runtime is an optional install and is not present in this build
    #[error("Assistant runtime is not installed: {0}")]
    NotInstalled(String),

    /// The runtime is present but its configuration cannot work
    #[error("Assistant runtime is misconfigured: {0}")]
    Misconfigured(String),

    #[error("Assistant runtime failed to load: {0}")]
    Failed(String),
}

/// Builds the assistant runtime
#[async_trait]
pub trait CapabilityFactory: Send + Sync {
    /// Construct a complete, ready to use runtime.
    ///
    /// Called at most once per successful load; a failed call may be
    /// retried by a later request.
    async fn load(&self) -> Result<Arc<dyn AssistantRuntime>, CapabilityLoadError>;
}
