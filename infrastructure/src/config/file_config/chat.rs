//! Chat configuration from TOML (`[chat]` section)

use chatsutra_domain::{ChatModel, ConfigIssue, ConfigIssueCode, DEFAULT_SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
///
/// # Example
///
/// ```toml
/// [chat]
/// model = "llama3-70b-8192"
/// system_prompt = "You are a helpful assistant."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Model identifier, one of the allowed models
    pub model: String,
    /// Instruction every new conversation starts with
    pub system_prompt: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            model: ChatModel::default().as_str().to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl FileChatConfig {
    /// Parse the model, falling back to the default on error.
    pub fn parse_model(&self) -> (ChatModel, Vec<ConfigIssue>) {
        match self.model.parse::<ChatModel>() {
            Ok(model) => (model, vec![]),
            Err(_) => (
                ChatModel::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::UnknownModel {
                        value: self.model.clone(),
                    },
                    format!(
                        "chat.model: unknown model '{}' (allowed: {})",
                        self.model,
                        ChatModel::identifiers().join(", ")
                    ),
                )],
            ),
        }
    }

    /// Validate the system prompt is not blank
    pub fn validate_system_prompt(&self) -> Vec<ConfigIssue> {
        if self.system_prompt.trim().is_empty() {
            vec![ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "chat.system_prompt".to_string(),
                },
                "chat.system_prompt is empty; conversations will start with a blank instruction",
            )]
        } else {
            vec![]
        }
    }
}
