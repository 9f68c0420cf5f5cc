//! CLI entrypoint for ChatSutra
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use chatsutra_application::{
    AttachContextUseCase, ChatSession, CompleteConversationUseCase, CompletionProgress,
    ConversationLogger, ManageSessionsUseCase, NoConversationLogger, TurnOutcome,
};
use chatsutra_infrastructure::{
    ConfigLoader, FileConfig, FileContextExtractor, GroqCompletionGateway, JsonSessionStore,
    JsonlConversationLogger,
};
use chatsutra_presentation::{
    ChatRepl, Cli, CompletionReporter, ConsoleFormatter, OutputConfig, ReplConfig,
    SimpleProgress, UNAVAILABLE_NOTICE,
};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;

    let issues = config.validate();
    for issue in &issues {
        eprintln!("{}", ConsoleFormatter::format_issue(issue));
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    OutputConfig {
        color: config.output.color,
    }
    .apply();

    let (model, _) = config.chat.parse_model();
    let (policy, _) = config.retry.to_retry_policy();
    info!(
        "Starting ChatSutra with {} ({} attempts, {:?} between)",
        model,
        policy.max_attempts(),
        policy.delay()
    );

    // === Dependency Injection ===
    let conversation_logger: Arc<dyn ConversationLogger> = match config
        .logging
        .conversation_log_path()
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let store = JsonSessionStore::open(config.storage.history_dir())
        .context("Failed to open the chat history directory")?;
    let sessions = ManageSessionsUseCase::new(Arc::new(store))
        .with_conversation_logger(conversation_logger.clone());

    if cli.list_sessions {
        let names = sessions.list()?;
        print!("{}", ConsoleFormatter::format_session_list(&names));
        return Ok(());
    }

    let gateway = GroqCompletionGateway::from_env(
        &config.provider.api_key_env,
        config.provider.base_url.clone(),
        config.provider.timeout(),
    )?;
    let completion = CompleteConversationUseCase::new(Arc::new(gateway))
        .with_policy(policy)
        .with_conversation_logger(conversation_logger.clone());

    let mut session = ChatSession::new(model, config.chat.system_prompt.clone());
    if let Some(name) = &cli.resume {
        let count = sessions
            .load_into(&mut session, name)
            .with_context(|| format!("Failed to resume '{}'", name))?;
        info!("Resumed '{}' with {} messages", name, count);
    }

    // Single question mode
    if let Some(question) = &cli.question {
        let progress: Box<dyn CompletionProgress> = if cli.quiet || !config.repl.show_progress {
            Box::new(SimpleProgress)
        } else {
            Box::new(CompletionReporter::new())
        };
        return match completion.send(&mut session, question, progress.as_ref()).await? {
            TurnOutcome::Answered(reply) => {
                println!("{}", reply);
                Ok(())
            }
            TurnOutcome::Unavailable => Err(anyhow!(UNAVAILABLE_NOTICE)),
        };
    }

    let context = AttachContextUseCase::new(Arc::new(FileContextExtractor::new()))
        .with_conversation_logger(conversation_logger);

    let mut repl = ChatRepl::new(session, completion, sessions, context).with_config(ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_path(),
    });
    repl.run().await?;

    Ok(())
}

/// Merge configuration sources and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(model) = &cli.model {
        config.chat.model = model.clone();
    }
    if let Some(dir) = &cli.history_dir {
        config.storage.history_dir = dir.display().to_string();
    }
    if let Some(path) = &cli.log_file {
        config.logging.conversation_log = Some(path.display().to_string());
    }

    Ok(config)
}
