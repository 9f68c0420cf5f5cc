//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where saved conversations live
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory of saved sessions, created on demand
    pub history_dir: String,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            history_dir: "chat_history".to_string(),
        }
    }
}

impl FileStorageConfig {
    pub fn history_dir(&self) -> PathBuf {
        super::expand_home(&self.history_dir)
    }
}
