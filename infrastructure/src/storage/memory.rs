//! In-memory chat repository.

use super::snapshot::ChatSnapshot;
use assistant_application::{ChatRepository, RepositoryError};
use assistant_domain::{Chat, ChatId, ChatMessage, NewChat, UserId, WorkspaceId};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Chats kept for the lifetime of the process
#[derive(Default)]
pub struct InMemoryChatRepository {
    state: RwLock<ChatSnapshot>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn create_chat(&self, chat: NewChat) -> Result<Chat, RepositoryError> {
        Ok(self.state.write().await.create(chat))
    }

    async fn list_chats(
        &self,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<Vec<Chat>, RepositoryError> {
        Ok(self.state.read().await.list(user, workspace))
    }

    async fn get_chat(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError> {
        Ok(self.state.read().await.get(id))
    }

    async fn append_messages(
        &self,
        chat: ChatId,
        messages: Vec<ChatMessage>,
    ) -> Result<(), RepositoryError> {
        self.state.write().await.append(chat, messages)
    }

    async fn list_messages(&self, chat: ChatId) -> Result<Vec<ChatMessage>, RepositoryError> {
        Ok(self.state.read().await.messages(chat))
    }
}
