//! Provider configuration from TOML (`[provider]` section)

use chatsutra_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Groq API provider configuration.
///
/// The key itself is never read from a file: only the name of the
/// environment variable holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Per-request timeout in seconds (none when unset).
    pub timeout_seconds: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            timeout_seconds: Some(60),
        }
    }
}

impl FileProviderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("provider.api_key_env", &self.api_key_env),
            ("provider.base_url", &self.base_url),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{field} cannot be empty"),
                ));
            }
        }
        issues
    }
}
