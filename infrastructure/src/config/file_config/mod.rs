//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod chat;
mod logging;
mod output;
mod provider;
mod repl;
mod retry;
mod storage;

pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;
pub use retry::FileRetryConfig;
pub use storage::FileStorageConfig;

use chatsutra_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model and system prompt
    pub chat: FileChatConfig,
    /// Completion API settings
    pub provider: FileProviderConfig,
    /// Retry on service unavailability
    pub retry: FileRetryConfig,
    /// Session persistence
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Conversation log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.chat.parse_model().1);
        issues.extend(self.chat.validate_system_prompt());
        issues.extend(self.provider.validate());
        issues.extend(self.retry.to_retry_policy().1);

        if self.storage.history_dir.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "storage.history_dir".to_string(),
                },
                "storage.history_dir cannot be empty",
            ));
        }

        issues
    }
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatsutra_domain::{ChatModel, DEFAULT_SYSTEM_PROMPT};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[chat]
model = "llama3-70b-8192"
system_prompt = "Answer in one sentence."

[provider]
api_key_env = "MY_GROQ_KEY"
timeout_seconds = 10

[retry]
max_retries = 5
delay_seconds = 1

[storage]
history_dir = "sessions"

[output]
color = false

[repl]
show_progress = false
history_file = "/tmp/chatsutra_history.txt"

[logging]
conversation_log = "logs/chat.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.parse_model().0, ChatModel::Llama3_70b);
        assert_eq!(config.chat.system_prompt, "Answer in one sentence.");
        assert_eq!(config.provider.api_key_env, "MY_GROQ_KEY");
        assert_eq!(config.provider.timeout(), Some(Duration::from_secs(10)));
        let (policy, _) = config.retry.to_retry_policy();
        assert_eq!(policy.max_attempts(), 5);
        assert_eq!(policy.delay(), Duration::from_secs(1));
        assert_eq!(config.storage.history_dir(), PathBuf::from("sessions"));
        assert_eq!(config.output.color, Some(false));
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.repl.history_path(),
            Some(PathBuf::from("/tmp/chatsutra_history.txt"))
        );
        assert_eq!(
            config.logging.conversation_log_path(),
            Some(PathBuf::from("logs/chat.jsonl"))
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[retry]
max_retries = 1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.retry.max_retries, 1);
        // Defaults should apply
        assert_eq!(config.retry.delay_seconds, 3);
        assert_eq!(config.chat.parse_model().0, ChatModel::Llama3_8b);
        assert_eq!(config.provider.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.storage.history_dir, "chat_history");
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.chat.model, "llama3-8b-8192");
        assert_eq!(config.chat.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.provider.base_url, "https://api.groq.com/openai/v1");
        assert!(config.output.color.is_none());
        assert!(config.repl.show_progress);
        assert!(config.logging.conversation_log_path().is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[chat]
model = "mixtral"

[provider]
api_key_env = ""

[retry]
max_retries = 0

[storage]
history_dir = " "
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 3);
        assert!(issues.iter().any(|i| i.code
            == ConfigIssueCode::UnknownModel {
                value: "mixtral".to_string()
            }));
        assert!(issues.iter().any(|i| i.code == ConfigIssueCode::ZeroRetries));
    }

    #[test]
    fn test_expand_home_leaves_relative_paths() {
        assert_eq!(expand_home("chat_history"), PathBuf::from("chat_history"));
    }
}
