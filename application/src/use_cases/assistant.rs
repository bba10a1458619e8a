//! Per-chat assistant handle.
//!
//! Obtained from [`AssistantHandler::get_assistant`](super::assistant_handler::AssistantHandler::get_assistant).
//! The handle is cheap: it pairs a chat with the already loaded runtime.

use crate::config::AssistantSettings;
use crate::error::AssistantError;
use crate::ports::assistant_runtime::{AssistantRuntime, PromptMessage, RuntimeError};
use crate::ports::chat_repository::ChatRepository;
use assistant_domain::{Chat, ChatMessage, DomainError, MessageRole, ModelId};
use std::sync::Arc;
use tracing::{debug, info};

/// Maximum number of characters of a question written to the logs
const LOG_PREVIEW_CHARS: usize = 80;

/// The assistant, bound to one chat
pub struct Assistant {
    chat: Chat,
    runtime: Arc<dyn AssistantRuntime>,
    chats: Arc<dyn ChatRepository>,
    settings: Arc<AssistantSettings>,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("chat", &self.chat.id)
            .field("runtime", &self.runtime.name())
            .field("model", &self.settings.model)
            .finish()
    }
}

impl Assistant {
    pub(crate) fn new(
        chat: Chat,
        runtime: Arc<dyn AssistantRuntime>,
        chats: Arc<dyn ChatRepository>,
        settings: Arc<AssistantSettings>,
    ) -> Self {
        Self {
            chat,
            runtime,
            chats,
            settings,
        }
    }

    pub fn chat(&self) -> &Chat {
        &self.chat
    }

    pub fn model(&self) -> &ModelId {
        &self.settings.model
    }

    pub fn runtime_name(&self) -> &str {
        self.runtime.name()
    }

    /// Whether both handles use the same runtime instance
    pub fn shares_runtime_with(&self, other: &Assistant) -> bool {
        Arc::ptr_eq(&self.runtime, &other.runtime)
    }

    /// Ask the assistant a question within this chat.
    ///
    /// The question and the reply are both appended to the chat history.
    pub async fn ask(&self, question: &str) -> Result<String, AssistantError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::EmptyMessage.into());
        }

        info!(
            chat = %self.chat.id,
            model = %self.settings.model,
            "Asking assistant: {}",
            preview(question)
        );

        let history = self.chats.list_messages(self.chat.id).await?;
        let prompt = self.build_prompt(&history, question);

        let request = self.runtime.complete(&self.settings.model, &prompt);
        let reply = match self.settings.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| RuntimeError::Timeout)??,
            None => request.await?,
        };
        debug!(chat = %self.chat.id, chars = reply.chars().count(), "Assistant replied");

        self.chats
            .append_messages(
                self.chat.id,
                vec![
                    ChatMessage::user(self.chat.id, question),
                    ChatMessage::assistant(self.chat.id, reply.clone()),
                ],
            )
            .await?;

        Ok(reply)
    }

    fn build_prompt(&self, history: &[ChatMessage], question: &str) -> Vec<PromptMessage> {
        let mut prompt = Vec::with_capacity(history.len().min(self.settings.history_limit) + 2);
        prompt.push(PromptMessage::system(format!(
            "{}\n\nWorkspace id: {}\nChat: {}",
            self.settings.system_prompt, self.chat.workspace_id, self.chat.title
        )));

        let skip = history.len().saturating_sub(self.settings.history_limit);
        prompt.extend(history.iter().skip(skip).map(|m| match m.role {
            MessageRole::User => PromptMessage::user(m.content.clone()),
            MessageRole::Assistant => PromptMessage::assistant(m.content.clone()),
        }));

        prompt.push(PromptMessage::user(question));
        prompt
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= LOG_PREVIEW_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::assistant_runtime::PromptRole;
    use crate::use_cases::testing::{MemoryChats, RecordingRuntime, user_and_workspace};
    use assistant_domain::NewChat;
    use std::time::Duration;

    async fn setup(
        runtime: Arc<RecordingRuntime>,
        settings: AssistantSettings,
    ) -> (Assistant, Arc<MemoryChats>) {
        let chats = Arc::new(MemoryChats::default());
        let (user, workspace) = user_and_workspace();
        let chat = chats
            .create_chat(NewChat::new(user, workspace, Some("Inventory")).unwrap())
            .await
            .unwrap();
        let assistant = Assistant::new(chat, runtime, chats.clone(), Arc::new(settings));
        (assistant, chats)
    }

    #[tokio::test]
    async fn ask_returns_reply_and_persists_exchange() {
        let runtime = Arc::new(RecordingRuntime::new("Use a lookup field."));
        let (assistant, chats) = setup(runtime.clone(), AssistantSettings::default()).await;

        let reply = assistant.ask("  How do I link tables? ").await.unwrap();
        assert_eq!(reply, "Use a lookup field.");

        let messages = chats.list_messages(assistant.chat().id).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].content, "How do I link tables?");
        assert_eq!(messages[1].role, MessageRole::Assistant);
        assert_eq!(messages[1].content, "Use a lookup field.");
    }

    #[tokio::test]
    async fn prompt_contains_system_history_and_question() {
        let runtime = Arc::new(RecordingRuntime::new("ok"));
        let (assistant, _chats) = setup(runtime.clone(), AssistantSettings::default()).await;

        assistant.ask("first").await.unwrap();
        assistant.ask("second").await.unwrap();

        let prompt = runtime.last_prompt().unwrap();
        let roles: Vec<_> = prompt.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                PromptRole::System,
                PromptRole::User,
                PromptRole::Assistant,
                PromptRole::User
            ]
        );
        assert!(prompt[0].content.contains("Chat: Inventory"));
        assert_eq!(prompt[3].content, "second");
    }

    #[tokio::test]
    async fn history_is_limited() {
        let runtime = Arc::new(RecordingRuntime::new("ok"));
        let settings = AssistantSettings {
            history_limit: 2,
            ..AssistantSettings::default()
        };
        let (assistant, _chats) = setup(runtime.clone(), settings).await;

        for q in ["one", "two", "three"] {
            assistant.ask(q).await.unwrap();
        }

        // system + 2 history messages + question
        let prompt = runtime.last_prompt().unwrap();
        assert_eq!(prompt.len(), 4);
        assert_eq!(prompt[1].content, "two");
    }

    #[tokio::test]
    async fn empty_question_is_rejected() {
        let runtime = Arc::new(RecordingRuntime::new("ok"));
        let (assistant, _chats) = setup(runtime.clone(), AssistantSettings::default()).await;

        let err = assistant.ask("   ").await.unwrap_err();
        assert!(matches!(err, AssistantError::InvalidInput(_)));
        assert!(runtime.last_prompt().is_none());
    }

    #[tokio::test]
    async fn runtime_failure_is_not_persisted() {
        let runtime = Arc::new(RecordingRuntime::failing());
        let (assistant, chats) = setup(runtime, AssistantSettings::default()).await;

        let err = assistant.ask("hello").await.unwrap_err();
        assert!(matches!(err, AssistantError::Runtime(_)));
        assert!(
            chats
                .list_messages(assistant.chat().id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn slow_runtime_times_out() {
        let runtime = Arc::new(RecordingRuntime::new("late").with_delay(Duration::from_secs(60)));
        let settings = AssistantSettings::default().with_timeout_seconds(Some(5));
        let (assistant, _chats) = setup(runtime, settings).await;

        let err = assistant.ask("hello").await.unwrap_err();
        assert_eq!(err.to_string(), "Assistant runtime error: Timeout");
    }

    #[test]
    fn preview_truncates_long_text() {
        let long = "a".repeat(200);
        let p = preview(&long);
        assert_eq!(p.chars().count(), LOG_PREVIEW_CHARS + 3);
        assert_eq!(preview("short"), "short");
    }
}
