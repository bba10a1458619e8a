//! Chat repository persisted as a single JSON file.
//!
//! The whole state is loaded on open and rewritten after every change
//! (written to a temporary file, then renamed over the original).

use super::snapshot::ChatSnapshot;
use assistant_application::{ChatRepository, RepositoryError};
use assistant_domain::{Chat, ChatId, ChatMessage, NewChat, UserId, WorkspaceId};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub struct JsonFileChatRepository {
    path: PathBuf,
    state: Mutex<ChatSnapshot>,
}

impl JsonFileChatRepository {
    /// Open the store at `path`, starting empty when the file does not exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();
        let state = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => ChatSnapshot::default(),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                RepositoryError::Storage(format!("Corrupt chat store {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Chat store {} does not exist yet", path.display());
                ChatSnapshot::default()
            }
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "Could not read chat store {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, state: &ChatSnapshot) -> Result<(), RepositoryError> {
        let storage_err = |e: std::io::Error| {
            warn!("Could not write chat store {}: {}", self.path.display(), e);
            RepositoryError::Storage(format!("Could not write {}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(storage_err)?;
        }

        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(storage_err)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(storage_err)
    }
}

#[async_trait]
impl ChatRepository for JsonFileChatRepository {
    async fn create_chat(&self, chat: NewChat) -> Result<Chat, RepositoryError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let chat = next.create(chat);
        self.persist(&next).await?;
        *state = next;
        Ok(chat)
    }

    async fn list_chats(
        &self,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<Vec<Chat>, RepositoryError> {
        Ok(self.state.lock().await.list(user, workspace))
    }

    async fn get_chat(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError> {
        Ok(self.state.lock().await.get(id))
    }

    async fn append_messages(
        &self,
        chat: ChatId,
        messages: Vec<ChatMessage>,
    ) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.append(chat, messages)?;
        self.persist(&next).await?;
        *state = next;
        Ok(())
    }

    async fn list_messages(&self, chat: ChatId) -> Result<Vec<ChatMessage>, RepositoryError> {
        Ok(self.state.lock().await.messages(chat))
    }
}
