//! Hand-written port doubles shared by the use case tests.

use crate::ports::assistant_runtime::{AssistantRuntime, PromptMessage, RuntimeError};
use crate::ports::capability_factory::{CapabilityFactory, CapabilityLoadError};
use crate::ports::chat_repository::{ChatRepository, RepositoryError};
use crate::ports::license::{LicenseError, LicensePort};
use assistant_domain::{Chat, ChatId, ChatMessage, Feature, NewChat, UserId, WorkspaceId};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn user_and_workspace() -> (UserId, WorkspaceId) {
    (UserId::new(1), WorkspaceId::new(10))
}

// -- Chat repository ----------------------------------------------------------

#[derive(Default)]
pub struct MemoryChats {
    inner: Mutex<MemoryChatsInner>,
}

#[derive(Default)]
struct MemoryChatsInner {
    next_id: u64,
    chats: Vec<Chat>,
    messages: Vec<ChatMessage>,
}

#[async_trait]
impl ChatRepository for MemoryChats {
    async fn create_chat(&self, chat: NewChat) -> Result<Chat, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let chat = chat.into_chat(ChatId::new(inner.next_id), Utc::now());
        inner.chats.push(chat.clone());
        Ok(chat)
    }

    async fn list_chats(
        &self,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<Vec<Chat>, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .chats
            .iter()
            .filter(|c| c.user_id == user && c.workspace_id == workspace)
            .cloned()
            .collect())
    }

    async fn get_chat(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.chats.iter().find(|c| c.id == id).cloned())
    }

    async fn append_messages(
        &self,
        chat: ChatId,
        messages: Vec<ChatMessage>,
    ) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(record) = inner.chats.iter_mut().find(|c| c.id == chat) else {
            return Err(RepositoryError::ChatNotFound(chat));
        };
        record.updated_at = Utc::now();
        inner.messages.extend(messages);
        Ok(())
    }

    async fn list_messages(&self, chat: ChatId) -> Result<Vec<ChatMessage>, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .messages
            .iter()
            .filter(|m| m.chat_id == chat)
            .cloned()
            .collect())
    }
}

// -- License ------------------------------------------------------------------

pub struct DenyAllLicense;

#[async_trait]
impl LicensePort for DenyAllLicense {
    async fn has_feature(
        &self,
        _feature: Feature,
        _user: UserId,
        _workspace: WorkspaceId,
    ) -> Result<bool, LicenseError> {
        Ok(false)
    }
}

// -- Runtime ------------------------------------------------------------------

pub struct RecordingRuntime {
    reply: Option<String>,
    delay: Option<Duration>,
    prompts: Mutex<Vec<Vec<PromptMessage>>>,
}

impl RecordingRuntime {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            delay: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            delay: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn last_prompt(&self) -> Option<Vec<PromptMessage>> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AssistantRuntime for RecordingRuntime {
    fn name(&self) -> &str {
        "recording"
    }

    async fn complete(
        &self,
        _model: &assistant_domain::ModelId,
        messages: &[PromptMessage],
    ) -> Result<String, RuntimeError> {
        self.prompts.lock().unwrap().push(messages.to_vec());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply
            .clone()
            .ok_or_else(|| RuntimeError::RequestFailed("provider returned 500".to_string()))
    }
}

// -- Capability factory -------------------------------------------------------

/// Factory that counts load attempts and successful loads.
pub struct CountingFactory {
    attempts: AtomicUsize,
    loads: AtomicUsize,
    failures_left: AtomicUsize,
    delay: Option<Duration>,
}

impl CountingFactory {
    pub fn new() -> Self {
        Self::failing(0)
    }

    /// Fail the first `n` loads.
    pub fn failing(n: usize) -> Self {
        Self {
            attempts: AtomicUsize::new(0),
            loads: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(n),
            delay: None,
        }
    }

    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay = Some(Duration::from_millis(ms));
        self
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CapabilityFactory for CountingFactory {
    async fn load(&self) -> Result<Arc<dyn AssistantRuntime>, CapabilityLoadError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(CapabilityLoadError::NotInstalled(
                "runtime feature disabled".to_string(),
            ));
        }

        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(RecordingRuntime::new("hello")))
    }
}
