//! Infrastructure layer for workspace-assistant
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: chat stores, the config-driven license checker and
//! the model-routing assistant runtime, plus configuration file loading.
//!
//! The HTTP provider of the runtime is an optional install (the `runtime`
//! feature). Chat storage and licensing work without it.

pub mod bootstrap;
pub mod config;
pub mod license;
pub mod providers;
pub mod runtime_factory;
pub mod storage;

// Re-export commonly used types
pub use bootstrap::{build_chat_repository, build_handler};
pub use config::{
    ColorChoice, ConfigLoader, FileAssistantConfig, FileConfig, FileLicenseConfig,
    FileOpenAiConfig, FileOutputConfig, FileProvidersConfig, FileStorageConfig,
};
pub use license::ConfigLicenseChecker;
pub use providers::{ProviderAdapter, ProviderKind, echo::EchoProvider, routing::ModelRouter};
pub use runtime_factory::RuntimeFactory;
pub use storage::{InMemoryChatRepository, JsonFileChatRepository};
