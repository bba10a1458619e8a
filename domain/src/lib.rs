//! Domain layer for workspace-assistant
//!
//! This crate contains the entities and value objects of the assistant
//! subsystem. It has no dependencies on infrastructure or presentation
//! concerns and never touches the assistant runtime.
//!
//! # Core Concepts
//!
//! ## Chats
//!
//! A [`Chat`] is a conversation between a user and the assistant inside a
//! workspace. Chats and their messages are plain metadata.
//!
//! ## Deferred capability
//!
//! The assistant runtime is optional and expensive. Its load state is
//! described by [`CapabilityState`]: `Unloaded` until first genuine use,
//! `Loaded` afterwards.

pub mod capability;
pub mod chat;
pub mod config;
pub mod core;
pub mod license;

// Re-export commonly used types
pub use capability::CapabilityState;
pub use chat::entities::{
    Chat, ChatMessage, DEFAULT_CHAT_TITLE, MAX_TITLE_CHARS, MessageRole, NewChat,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    ids::{ChatId, UserId, WorkspaceId},
    model::ModelId,
};
pub use license::Feature;
