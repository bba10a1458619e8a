//! Assistant handler: chat metadata plus the deferred assistant runtime.
//!
//! The handler serves two kinds of operations:
//!
//! - **Metadata operations** ([`create_chat`], [`list_chats`], [`get_chat`],
//!   [`list_messages`]) only touch the [`ChatRepository`]. They work even
//!   when the runtime is not installed.
//! - **The capability operation** ([`get_assistant`]) loads the runtime
//!   through the [`CapabilityFactory`] on first use and caches it for the
//!   lifetime of the handler.
//!
//! # Load policy
//!
//! ```text
//! Unloaded ──get_assistant (factory ok)──▶ Loaded
//!    ▲   │
//!    └───┘ factory error: stays Unloaded, next call retries
//! ```
//!
//! Initialization is serialized by a dedicated load mutex: the factory runs
//! while it is held and the state is re-checked after acquiring it.
//! Concurrent first users therefore wait for a single construction and all
//! receive the same runtime. The state itself lives behind a `RwLock` that
//! is only write-locked for the final assignment, so
//! [`capability_state`] keeps answering during a slow load. The state only
//! becomes `Loaded` once the factory returned, so a partially built runtime
//! is never handed out.
//!
//! [`create_chat`]: AssistantHandler::create_chat
//! [`list_chats`]: AssistantHandler::list_chats
//! [`get_chat`]: AssistantHandler::get_chat
//! [`list_messages`]: AssistantHandler::list_messages
//! [`get_assistant`]: AssistantHandler::get_assistant
//! [`capability_state`]: AssistantHandler::capability_state

use crate::config::AssistantSettings;
use crate::error::AssistantError;
use crate::ports::assistant_runtime::AssistantRuntime;
use crate::ports::capability_factory::CapabilityFactory;
use crate::ports::chat_repository::ChatRepository;
use crate::ports::license::{LicensePort, UnrestrictedLicense};
use crate::use_cases::assistant::Assistant;
use assistant_domain::{
    CapabilityState, Chat, ChatId, ChatMessage, Feature, NewChat, UserId, WorkspaceId,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Internal capability handle
enum Capability {
    Unloaded,
    Loaded {
        runtime: Arc<dyn AssistantRuntime>,
        loaded_at: DateTime<Utc>,
    },
}

/// Entry point for everything the assistant does.
///
/// Cheap to construct: building a handler never loads the runtime. Share
/// it between concurrent requests behind an `Arc`.
pub struct AssistantHandler {
    chats: Arc<dyn ChatRepository>,
    license: Arc<dyn LicensePort>,
    factory: Arc<dyn CapabilityFactory>,
    settings: Arc<AssistantSettings>,
    capability: RwLock<Capability>,
    /// Serializes loads; never held by readers of `capability`
    load_lock: Mutex<()>,
}

impl AssistantHandler {
    pub fn new(chats: Arc<dyn ChatRepository>, factory: Arc<dyn CapabilityFactory>) -> Self {
        Self {
            chats,
            license: Arc::new(UnrestrictedLicense),
            factory,
            settings: Arc::new(AssistantSettings::default()),
            capability: RwLock::new(Capability::Unloaded),
            load_lock: Mutex::new(()),
        }
    }

    /// Gate the assistant behind a license.
    pub fn with_license(mut self, license: Arc<dyn LicensePort>) -> Self {
        self.license = license;
        self
    }

    pub fn with_settings(mut self, settings: AssistantSettings) -> Self {
        self.settings = Arc::new(settings);
        self
    }

    pub fn settings(&self) -> &AssistantSettings {
        &self.settings
    }

    // ==================== Metadata operations ====================

    /// Create a chat for `user` in `workspace`.
    pub async fn create_chat(
        &self,
        user: UserId,
        workspace: WorkspaceId,
        title: Option<&str>,
    ) -> Result<Chat, AssistantError> {
        let new_chat = NewChat::new(user, workspace, title)?;
        let chat = self.chats.create_chat(new_chat).await?;
        debug!(chat = %chat.id, %user, %workspace, "Created assistant chat");
        Ok(chat)
    }

    /// Chats of `user` in `workspace`, most recently updated first.
    pub async fn list_chats(
        &self,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<Vec<Chat>, AssistantError> {
        let mut chats = self.chats.list_chats(user, workspace).await?;
        chats.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(chats)
    }

    /// Fetch a chat of `user`.
    ///
    /// Chats of other users are reported as missing.
    pub async fn get_chat(&self, user: UserId, id: ChatId) -> Result<Chat, AssistantError> {
        match self.chats.get_chat(id).await? {
            Some(chat) if chat.is_owned_by(user) => Ok(chat),
            _ => Err(AssistantError::NotFound(format!("Chat {} does not exist", id))),
        }
    }

    /// Messages of a chat of `user`, oldest first.
    pub async fn list_messages(
        &self,
        user: UserId,
        id: ChatId,
    ) -> Result<Vec<ChatMessage>, AssistantError> {
        let chat = self.get_chat(user, id).await?;
        Ok(self.chats.list_messages(chat.id).await?)
    }

    /// Current load state of the runtime. Never triggers a load.
    pub async fn capability_state(&self) -> CapabilityState {
        match &*self.capability.read().await {
            Capability::Unloaded => CapabilityState::Unloaded,
            Capability::Loaded { loaded_at, .. } => CapabilityState::Loaded {
                loaded_at: *loaded_at,
            },
        }
    }

    // ==================== Capability operation ====================

    /// Get the assistant for `chat`, loading the runtime on first use.
    ///
    /// The chat is re-read from the store, so a record that does not exist
    /// (or belongs to another user) fails with [`AssistantError::NotFound`]
    /// before anything is loaded. Fails with
    /// [`AssistantError::PermissionDenied`] when the workspace is not
    /// licensed for the assistant (the runtime is not loaded in that case)
    /// and with [`AssistantError::CapabilityUnavailable`] when the runtime
    /// cannot be loaded.
    pub async fn get_assistant(&self, chat: &Chat) -> Result<Assistant, AssistantError> {
        let chat = self.get_chat(chat.user_id, chat.id).await?;
        let runtime = self.licensed_runtime(chat.user_id, chat.workspace_id).await?;
        Ok(self.assistant_for(chat, runtime))
    }

    /// Check the license and load the runtime without touching any chat.
    pub async fn ensure_available(
        &self,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<(), AssistantError> {
        self.licensed_runtime(user, workspace).await.map(|_| ())
    }

    /// Create a chat and return its assistant.
    ///
    /// The chat is only stored once the assistant is available, so a
    /// refused request leaves no empty chat behind.
    pub async fn open_chat(
        &self,
        user: UserId,
        workspace: WorkspaceId,
        title: Option<&str>,
    ) -> Result<Assistant, AssistantError> {
        let new_chat = NewChat::new(user, workspace, title)?;
        let runtime = self.licensed_runtime(user, workspace).await?;
        let chat = self.chats.create_chat(new_chat).await?;
        debug!(chat = %chat.id, %user, %workspace, "Opened assistant chat");
        Ok(self.assistant_for(chat, runtime))
    }

    fn assistant_for(&self, chat: Chat, runtime: Arc<dyn AssistantRuntime>) -> Assistant {
        Assistant::new(chat, runtime, self.chats.clone(), self.settings.clone())
    }

    async fn licensed_runtime(
        &self,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<Arc<dyn AssistantRuntime>, AssistantError> {
        self.license
            .require_feature(Feature::Assistant, user, workspace)
            .await?;
        self.runtime().await
    }

    async fn loaded_runtime(&self) -> Option<Arc<dyn AssistantRuntime>> {
        match &*self.capability.read().await {
            Capability::Loaded { runtime, .. } => Some(runtime.clone()),
            Capability::Unloaded => None,
        }
    }

    async fn runtime(&self) -> Result<Arc<dyn AssistantRuntime>, AssistantError> {
        if let Some(runtime) = self.loaded_runtime().await {
            return Ok(runtime);
        }

        let _loading = self.load_lock.lock().await;
        // Another request may have finished loading while we waited.
        if let Some(runtime) = self.loaded_runtime().await {
            debug!("Assistant runtime was loaded concurrently, reusing it");
            return Ok(runtime);
        }

        info!("Loading assistant runtime");
        let started = Instant::now();
        let runtime = match self.factory.load().await {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!("Assistant runtime failed to load: {}", e);
                return Err(e.into());
            }
        };

        *self.capability.write().await = Capability::Loaded {
            runtime: runtime.clone(),
            loaded_at: Utc::now(),
        };
        info!(
            runtime = runtime.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Assistant runtime loaded"
        );

        Ok(runtime)
    }
}
