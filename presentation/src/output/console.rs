//! Console output for assistant commands
//!
//! Every function renders either colored text or pretty JSON, depending on
//! the [`OutputFormat`].

use crate::api_errors::ApiError;
use assistant_application::AssistantError;
use assistant_domain::{CapabilityState, Chat, ChatMessage, ConfigIssue, MessageRole, OutputFormat};
use colored::Colorize;
use serde::Serialize;
use serde_json::json;

/// Runtime and license status of a workspace
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub workspace: u64,
    pub model: String,
    pub runtime_installed: bool,
    pub assistant_licensed: bool,
    pub capability: CapabilityState,
}

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn chat_list(chats: &[Chat], format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::json(&chats);
        }
        if chats.is_empty() {
            return format!("{}\n", "No chats yet.".dimmed());
        }

        let mut output = String::new();
        output.push_str(&Self::header("Chats"));
        for chat in chats {
            output.push_str(&Self::chat_line(chat));
        }
        output
    }

    /// A chat with its messages
    pub fn chat(chat: &Chat, messages: &[ChatMessage], format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::json(&json!({ "chat": chat, "messages": messages }));
        }

        let mut output = Self::chat_line(chat);
        output.push_str(&format!(
            "{} {}\n",
            "Updated:".cyan().bold(),
            chat.updated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        if messages.is_empty() {
            output.push_str(&format!("\n{}\n", "No messages yet.".dimmed()));
        }
        for message in messages {
            output.push('\n');
            output.push_str(&Self::message(message));
        }
        output
    }

    /// The assistant's reply to a question
    pub fn reply(chat: &Chat, answer: &str, format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::json(&json!({ "chat_id": chat.id, "answer": answer }));
        }
        format!(
            "{}\n{}\n",
            format!("── {} (#{}) ──", chat.title, chat.id).yellow().bold(),
            answer
        )
    }

    pub fn status(report: &StatusReport, format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::json(report);
        }

        let mut output = String::new();
        output.push_str(&Self::header("Assistant status"));
        output.push_str(&format!("{} {}\n", "Workspace:".cyan().bold(), report.workspace));
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), report.model));
        output.push_str(&format!(
            "{} {}\n",
            "Runtime:".cyan().bold(),
            Self::yes_no(report.runtime_installed, "installed", "not installed")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "License:".cyan().bold(),
            Self::yes_no(report.assistant_licensed, "licensed", "not licensed")
        ));
        output.push_str(&format!("{} {}\n", "State:".cyan().bold(), report.capability));
        output
    }

    /// Configuration issues found by validation
    pub fn config_issues(issues: &[ConfigIssue]) -> String {
        let mut output = String::new();
        for issue in issues {
            let label = if issue.is_error() {
                "error:".red().bold()
            } else {
                "warning:".yellow().bold()
            };
            output.push_str(&format!("{} {}\n", label, issue.message));
        }
        output
    }

    pub fn error(err: &AssistantError, format: OutputFormat) -> String {
        let api = ApiError::from(err);
        if format == OutputFormat::Json {
            return Self::json(&json!({
                "error": api.code,
                "status": api.status,
                "detail": api.detail,
                "message": err.to_string(),
            }));
        }
        format!(
            "{} {}\n  {}\n",
            format!("{}:", api.code).red().bold(),
            api.detail,
            err.to_string().dimmed()
        )
    }

    fn chat_line(chat: &Chat) -> String {
        format!(
            "{} {}\n",
            format!("#{}", chat.id).yellow().bold(),
            chat.title
        )
    }

    fn message(message: &ChatMessage) -> String {
        let who = match message.role {
            MessageRole::User => "You".green().bold(),
            MessageRole::Assistant => "Assistant".cyan().bold(),
        };
        format!("{}\n{}\n", who, Self::indent(&message.content, "  "))
    }

    fn yes_no(value: bool, yes: &str, no: &str) -> String {
        if value {
            yes.green().to_string()
        } else {
            no.red().to_string()
        }
    }

    fn header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
