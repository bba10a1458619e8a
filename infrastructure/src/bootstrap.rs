//! Wiring of the assistant handler from a loaded configuration.
//!
//! Everything built here is cheap: the chat store, the license checker and
//! an unloaded [`RuntimeFactory`]. The runtime itself is built later, by the
//! handler, on the first `get_assistant` call.

use crate::config::FileConfig;
use crate::license::ConfigLicenseChecker;
use crate::runtime_factory::RuntimeFactory;
use crate::storage::{InMemoryChatRepository, JsonFileChatRepository};
use assistant_application::{AssistantHandler, ChatRepository, RepositoryError};
use std::sync::Arc;
use tracing::info;

/// Build the chat store selected by `[storage]`.
pub async fn build_chat_repository(
    config: &FileConfig,
) -> Result<Arc<dyn ChatRepository>, RepositoryError> {
    match &config.storage.path {
        Some(path) => {
            info!("Using chat store {}", path.display());
            Ok(Arc::new(JsonFileChatRepository::open(path).await?))
        }
        None => {
            info!("Using in-memory chat store");
            Ok(Arc::new(InMemoryChatRepository::new()))
        }
    }
}

/// Build a handler with the runtime left unloaded.
pub async fn build_handler(config: &FileConfig) -> Result<AssistantHandler, RepositoryError> {
    let chats = build_chat_repository(config).await?;
    let settings = config.assistant.to_settings();
    let factory = RuntimeFactory::new(config.providers.clone(), settings.model.clone());

    Ok(AssistantHandler::new(chats, Arc::new(factory))
        .with_license(Arc::new(ConfigLicenseChecker::from_config(&config.license)))
        .with_settings(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_application::AssistantError;
    use assistant_domain::{UserId, WorkspaceId};

    fn licensed_echo_config() -> FileConfig {
        let mut config = FileConfig::default();
        config.assistant.model = "echo/demo".to_string();
        config.providers.echo = true;
        config.providers.openai.api_key_env = "WORKSPACE_ASSISTANT_TEST_UNSET_KEY".to_string();
        config.license.enterprise = true;
        config
    }

    #[tokio::test]
    async fn lazy_loading_scenario() {
        let handler = build_handler(&licensed_echo_config()).await.unwrap();
        let (user, workspace) = (UserId::new(1), WorkspaceId::new(1));

        // Fresh handler, runtime unloaded
        assert!(!handler.capability_state().await.is_loaded());

        // Listing chats leaves it unloaded
        let chats = handler.list_chats(user, workspace).await.unwrap();
        assert!(chats.is_empty());
        assert!(!handler.capability_state().await.is_loaded());

        // First get_assistant loads it
        let chat = handler.create_chat(user, workspace, None).await.unwrap();
        let assistant = handler.get_assistant(&chat).await.unwrap();
        let state = handler.capability_state().await;
        assert!(state.is_loaded());
        assert_eq!(assistant.ask("hello").await.unwrap(), "[demo] hello");

        // Second call reuses it
        let again = handler.get_assistant(&chat).await.unwrap();
        assert!(assistant.shares_runtime_with(&again));
        assert_eq!(handler.capability_state().await, state);
    }

    #[tokio::test]
    async fn unavailable_runtime_keeps_metadata_working() {
        let mut config = licensed_echo_config();
        config.providers.echo = false;
        let handler = build_handler(&config).await.unwrap();
        let (user, workspace) = (UserId::new(1), WorkspaceId::new(1));

        let chat = handler.create_chat(user, workspace, Some("a")).await.unwrap();
        let err = handler.get_assistant(&chat).await.unwrap_err();
        assert!(err.is_unavailable());

        assert_eq!(handler.list_chats(user, workspace).await.unwrap().len(), 1);
        assert!(!handler.capability_state().await.is_loaded());
    }

    #[tokio::test]
    async fn unlicensed_workspace_is_denied() {
        let mut config = licensed_echo_config();
        config.license.enterprise = false;
        let handler = build_handler(&config).await.unwrap();

        let chat = handler
            .create_chat(UserId::new(1), WorkspaceId::new(1), None)
            .await
            .unwrap();
        let err = handler.get_assistant(&chat).await.unwrap_err();
        assert!(matches!(err, AssistantError::PermissionDenied(_)));
        assert!(!handler.capability_state().await.is_loaded());
    }

    #[tokio::test]
    async fn refused_open_chat_leaves_json_store_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = licensed_echo_config();
        config.license.enterprise = false;
        config.storage.path = Some(dir.path().join("chats.json"));
        let (user, workspace) = (UserId::new(1), WorkspaceId::new(1));

        let handler = build_handler(&config).await.unwrap();
        for _ in 0..2 {
            let err = handler.open_chat(user, workspace, None).await.unwrap_err();
            assert!(matches!(err, AssistantError::PermissionDenied(_)));
        }

        let reopened = build_handler(&config).await.unwrap();
        assert!(reopened.list_chats(user, workspace).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn json_store_is_selected_by_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = licensed_echo_config();
        config.storage.path = Some(dir.path().join("chats.json"));

        let handler = build_handler(&config).await.unwrap();
        handler
            .create_chat(UserId::new(1), WorkspaceId::new(1), None)
            .await
            .unwrap();

        assert!(dir.path().join("chats.json").exists());
    }
}
