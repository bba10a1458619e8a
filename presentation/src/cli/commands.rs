//! CLI command definitions

use assistant_domain::{ChatId, OutputFormat, UserId, WorkspaceId};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for workspace-assistant
#[derive(Parser, Debug)]
#[command(name = "workspace-assistant")]
#[command(author, version, about = "Workspace AI assistant with a lazily loaded runtime")]
#[command(long_about = r#"
Manage assistant chats of a workspace and ask the assistant questions.

Chat metadata commands (`chats`, `status`, `config`) never load the
assistant runtime. The runtime is built on the first `ask`.

Configuration files are loaded from (in priority order):
1. ASSISTANT_* environment variables
2. --config <path>       Explicit config file
3. ./assistant.toml      Project-level config
4. ~/.config/workspace-assistant/config.toml   Global config

Example:
  workspace-assistant chats create --title "Planning"
  workspace-assistant chats list --workspace 7
  workspace-assistant ask --chat 1 "Summarize the sales table"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Acting user id
    #[arg(long, global = true, default_value = "1", value_name = "ID")]
    pub user: UserId,

    /// Workspace id
    #[arg(long, global = true, default_value = "1", value_name = "ID")]
    pub workspace: WorkspaceId,

    /// Output format (overrides `[output] format`)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage chats
    Chats {
        #[command(subcommand)]
        action: ChatsCommand,
    },

    /// Ask the assistant (loads the runtime)
    Ask {
        /// Chat to continue; a new chat is created when omitted
        #[arg(long, value_name = "ID")]
        chat: Option<ChatId>,

        /// Title of the new chat
        #[arg(long, conflicts_with = "chat")]
        title: Option<String>,

        /// The question
        question: String,
    },

    /// Show runtime and license status
    Status,

    /// Show configuration sources and validation issues
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ChatsCommand {
    /// List chats, most recently updated first
    List,

    /// Create a chat
    Create {
        #[arg(long)]
        title: Option<String>,
    },

    /// Show a chat and its messages
    Show {
        /// Chat id
        id: ChatId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["workspace-assistant", "chats", "list"]).unwrap();
        assert_eq!(cli.user, UserId::new(1));
        assert_eq!(cli.workspace, WorkspaceId::new(1));
        assert_eq!(cli.output, None);
        assert!(matches!(
            cli.command,
            Command::Chats {
                action: ChatsCommand::List
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "workspace-assistant",
            "ask",
            "--chat",
            "4",
            "hello",
            "--workspace",
            "9",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.workspace, WorkspaceId::new(9));
        assert_eq!(cli.output, Some(OutputArg::Json));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Ask {
                chat,
                title,
                question,
            } => {
                assert_eq!(chat, Some(ChatId::new(4)));
                assert_eq!(title, None);
                assert_eq!(question, "hello");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ask_rejects_chat_and_title_together() {
        let result = Cli::try_parse_from([
            "workspace-assistant",
            "ask",
            "--chat",
            "1",
            "--title",
            "x",
            "hi",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_chat_id() {
        let result = Cli::try_parse_from(["workspace-assistant", "chats", "show", "abc"]);
        assert!(result.is_err());
    }
}
