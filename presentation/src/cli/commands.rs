//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for chatsutra
#[derive(Parser, Debug)]
#[command(name = "chatsutra")]
#[command(author, version, about = "Terminal chat client for Groq-hosted models")]
#[command(long_about = r#"
ChatSutra is a terminal chat client for Groq-hosted LLMs with saved
conversations and file context.

Without a question it starts an interactive chat. Conversations can be
saved, listed, loaded and exported from inside the chat (type /help).

The API key is read from the GROQ_API_KEY environment variable (the
variable name can be changed with [provider] api_key_env).

Configuration files are loaded from (in priority order):
1. CHATSUTRA_* environment variables (e.g. CHATSUTRA_RETRY__MAX_RETRIES=5)
2. --config <path>       Explicit config file
3. ./chatsutra.toml      Project-level config
4. ~/.config/chatsutra/config.toml   Global config

Example:
  chatsutra "Explain ownership in Rust in two sentences"
  chatsutra --model llama3-70b-8192
  chatsutra --resume "Explain ownership in Rust in two sentences"
"#)]
pub struct Cli {
    /// Ask a single question and exit (starts interactive chat when omitted)
    pub question: Option<String>,

    /// Model to use (llama3-8b-8192, llama3-70b-8192, deepseek-r1-distill-llama-70b)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Load a saved conversation before starting the chat
    #[arg(short, long, value_name = "NAME")]
    pub resume: Option<String>,

    /// List saved conversations and exit
    #[arg(short, long)]
    pub list_sessions: bool,

    /// Directory holding saved conversations
    #[arg(long, value_name = "DIR")]
    pub history_dir: Option<PathBuf>,

    /// Append conversation events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot_question() {
        let cli = Cli::parse_from(["chatsutra", "-m", "llama3-70b-8192", "-vv", "Hi there"]);
        assert_eq!(cli.question.as_deref(), Some("Hi there"));
        assert_eq!(cli.model.as_deref(), Some("llama3-70b-8192"));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.list_sessions);
    }

    #[test]
    fn test_parse_resume_and_overrides() {
        let cli = Cli::parse_from([
            "chatsutra",
            "--resume",
            "Hello",
            "--history-dir",
            "/tmp/sessions",
            "--no-config",
        ]);
        assert!(cli.question.is_none());
        assert_eq!(cli.resume.as_deref(), Some("Hello"));
        assert_eq!(cli.history_dir, Some(PathBuf::from("/tmp/sessions")));
        assert!(cli.no_config);
    }
}
