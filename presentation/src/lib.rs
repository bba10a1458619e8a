//! Presentation layer for workspace-assistant
//!
//! This crate contains the CLI definition, console and JSON output
//! formatting, and the API error codes of assistant failures.

pub mod api_errors;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use api_errors::ApiError;
pub use cli::commands::{ChatsCommand, Cli, Command, OutputArg};
pub use output::console::{ConsoleFormatter, StatusReport};
