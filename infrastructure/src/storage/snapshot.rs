//! Serializable chat state shared by the chat stores.

use assistant_application::RepositoryError;
use assistant_domain::{Chat, ChatId, ChatMessage, NewChat, UserId, WorkspaceId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ChatSnapshot {
    last_id: u64,
    chats: Vec<Chat>,
    messages: Vec<ChatMessage>,
}

impl ChatSnapshot {
    pub(crate) fn create(&mut self, chat: NewChat) -> Chat {
        self.last_id += 1;
        let chat = chat.into_chat(ChatId::new(self.last_id), Utc::now());
        self.chats.push(chat.clone());
        chat
    }

    pub(crate) fn list(&self, user: UserId, workspace: WorkspaceId) -> Vec<Chat> {
        self.chats
            .iter()
            .filter(|c| c.user_id == user && c.workspace_id == workspace)
            .cloned()
            .collect()
    }

    pub(crate) fn get(&self, id: ChatId) -> Option<Chat> {
        self.chats.iter().find(|c| c.id == id).cloned()
    }

    pub(crate) fn append(
        &mut self,
        id: ChatId,
        messages: Vec<ChatMessage>,
    ) -> Result<(), RepositoryError> {
        let chat = self
            .chats
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::ChatNotFound(id))?;
        chat.updated_at = Utc::now();
        self.messages.extend(messages);
        Ok(())
    }

    pub(crate) fn messages(&self, id: ChatId) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .filter(|m| m.chat_id == id)
            .cloned()
            .collect()
    }
}
