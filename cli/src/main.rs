//! CLI entrypoint for workspace-assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection. No command other than `ask` loads the
//! assistant runtime.

use anyhow::{Result, anyhow, bail};
use assistant_application::{AssistantError, AssistantHandler, LicensePort};
use assistant_domain::{Feature, OutputFormat};
use assistant_infrastructure::{
    ConfigLicenseChecker, ConfigLoader, FileConfig, RuntimeFactory, build_handler,
};
use assistant_presentation::{ChatsCommand, Cli, Command, ConsoleFormatter, StatusReport};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting workspace-assistant");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let format = config.output.format_with(cli.output.map(OutputFormat::from));
    if let Some(color) = config.output.color_override(format) {
        colored::control::set_override(color);
    }

    let issues = config.validate();
    if let Command::Config = cli.command {
        for line in ConfigLoader::describe_config_sources() {
            println!("{}", line);
        }
        if issues.is_empty() {
            println!("No configuration issues.");
        } else {
            print!("{}", ConsoleFormatter::config_issues(&issues));
        }
        return Ok(());
    }

    eprint!("{}", ConsoleFormatter::config_issues(&issues));
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration, run `workspace-assistant config` for details");
    }

    // === Dependency Injection ===
    // Cheap wiring only: the runtime stays unloaded until `ask`
    let handler = build_handler(&config).await?;

    if let Err(err) = run(&cli, &config, &handler, format).await {
        eprint!("{}", ConsoleFormatter::error(&err, format));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(
    cli: &Cli,
    config: &FileConfig,
    handler: &AssistantHandler,
    format: OutputFormat,
) -> Result<(), AssistantError> {
    let (user, workspace) = (cli.user, cli.workspace);

    match &cli.command {
        Command::Chats { action } => match action {
            ChatsCommand::List => {
                let chats = handler.list_chats(user, workspace).await?;
                print!("{}", ConsoleFormatter::chat_list(&chats, format));
            }
            ChatsCommand::Create { title } => {
                let chat = handler.create_chat(user, workspace, title.as_deref()).await?;
                print!("{}", ConsoleFormatter::chat(&chat, &[], format));
            }
            ChatsCommand::Show { id } => {
                let chat = handler.get_chat(user, *id).await?;
                let messages = handler.list_messages(user, *id).await?;
                print!("{}", ConsoleFormatter::chat(&chat, &messages, format));
            }
        },
        Command::Ask {
            chat,
            title,
            question,
        } => {
            let assistant = match chat {
                Some(id) => {
                    let chat = handler.get_chat(user, *id).await?;
                    handler.get_assistant(&chat).await?
                }
                None => handler.open_chat(user, workspace, title.as_deref()).await?,
            };
            let answer = assistant.ask(question).await?;
            print!("{}", ConsoleFormatter::reply(assistant.chat(), &answer, format));
        }
        Command::Status => {
            let license = ConfigLicenseChecker::from_config(&config.license);
            let report = StatusReport {
                workspace: workspace.get(),
                model: handler.settings().model.to_string(),
                runtime_installed: RuntimeFactory::runtime_installed(),
                assistant_licensed: license
                    .has_feature(Feature::Assistant, user, workspace)
                    .await?,
                capability: handler.capability_state().await,
            };
            print!("{}", ConsoleFormatter::status(&report, format));
        }
        Command::Config => {}
    }

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr, or to `log_file` through a non-blocking writer.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}
