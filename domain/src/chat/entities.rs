//! Chat domain entities

use crate::core::error::DomainError;
use crate::core::ids::{ChatId, UserId, WorkspaceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to chats created without one
pub const DEFAULT_CHAT_TITLE: &str = "New chat";

/// Maximum chat title length in characters
pub const MAX_TITLE_CHARS: usize = 250;

/// Role of a message in a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A persisted message within a chat (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub chat_id: ChatId,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(chat_id: ChatId, content: impl Into<String>) -> Self {
        Self::new(chat_id, MessageRole::User, content)
    }

    pub fn assistant(chat_id: ChatId, content: impl Into<String>) -> Self {
        Self::new(chat_id, MessageRole::Assistant, content)
    }

    fn new(chat_id: ChatId, role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            chat_id,
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A conversation between one user and the assistant inside a workspace (Entity)
///
/// Chats are lightweight metadata: creating, listing and reading them never
/// requires the assistant runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub user_id: UserId,
    pub workspace_id: WorkspaceId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    /// Whether `user` may read and use this chat
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user_id == user
    }
}

/// Validated input for creating a chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChat {
    pub user_id: UserId,
    pub workspace_id: WorkspaceId,
    pub title: String,
}

impl NewChat {
    /// Validate and normalize a new chat.
    ///
    /// Blank or missing titles fall back to [`DEFAULT_CHAT_TITLE`].
    pub fn new(
        user_id: UserId,
        workspace_id: WorkspaceId,
        title: Option<&str>,
    ) -> Result<Self, DomainError> {
        let title = title.map(str::trim).filter(|t| !t.is_empty());
        let title = match title {
            Some(t) => {
                let len = t.chars().count();
                if len > MAX_TITLE_CHARS {
                    return Err(DomainError::TitleTooLong {
                        len,
                        max: MAX_TITLE_CHARS,
                    });
                }
                t.to_string()
            }
            None => DEFAULT_CHAT_TITLE.to_string(),
        };

        Ok(Self {
            user_id,
            workspace_id,
            title,
        })
    }

    /// Materialize the chat with a store-assigned id
    pub fn into_chat(self, id: ChatId, now: DateTime<Utc>) -> Chat {
        Chat {
            id,
            user_id: self.user_id,
            workspace_id: self.workspace_id,
            title: self.title,
            created_at: now,
            updated_at: now,
        }
    }
}
