//! Retry configuration from TOML (`[retry]` section)

use chatsutra_application::RetryPolicy;
use chatsutra_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw retry configuration from TOML
///
/// `max_retries` is the total number of attempts, the first included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    pub max_retries: u32,
    pub delay_seconds: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay_seconds: 3,
        }
    }
}

impl FileRetryConfig {
    /// Convert to a [`RetryPolicy`], reporting a zero attempt count.
    pub fn to_retry_policy(&self) -> (RetryPolicy, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        if self.max_retries == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroRetries,
                "retry.max_retries is 0; one attempt will still be made",
            ));
        }
        let policy = RetryPolicy::new(self.max_retries, Duration::from_secs(self.delay_seconds));
        (policy, issues)
    }
}
