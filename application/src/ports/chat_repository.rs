//! Chat repository port
//!
//! Defines how the assistant persists chats and their messages. These are
//! the lightweight metadata operations; no implementation may depend on the
//! assistant runtime.

use assistant_domain::{Chat, ChatId, ChatMessage, NewChat, UserId, WorkspaceId};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during chat repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Chat {0} does not exist")]
    ChatNotFound(ChatId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Persistence for assistant chats
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Store a new chat and assign it an id
    async fn create_chat(&self, chat: NewChat) -> Result<Chat, RepositoryError>;

    /// All chats of `user` in `workspace`, in no particular order
    async fn list_chats(
        &self,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<Vec<Chat>, RepositoryError>;

    /// Fetch a chat by id, `None` if it does not exist
    async fn get_chat(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError>;

    /// Append messages to a chat and bump its `updated_at`
    ///
    /// Fails with [`RepositoryError::ChatNotFound`] for unknown chats.
    async fn append_messages(
        &self,
        chat: ChatId,
        messages: Vec<ChatMessage>,
    ) -> Result<(), RepositoryError>;

    /// Messages of a chat in insertion order
    async fn list_messages(&self, chat: ChatId) -> Result<Vec<ChatMessage>, RepositoryError>;
}
