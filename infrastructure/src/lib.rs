//! Infrastructure layer for chatsutra
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod context;
pub mod logging;
pub mod providers;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ENV_PREFIX, FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig, FileRetryConfig, FileStorageConfig,
};
pub use context::FileContextExtractor;
pub use logging::JsonlConversationLogger;
pub use providers::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, GroqCompletionGateway};
pub use storage::{DEFAULT_HISTORY_DIR, JsonSessionStore};
