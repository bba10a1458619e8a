//! Assistant chat domain.
//!
//! - [`entities::Chat`]: a user's conversation with the assistant in a workspace
//! - [`entities::ChatMessage`]: a single persisted message within a chat
//! - [`entities::NewChat`]: validated input for creating a chat

pub mod entities;
