//! Configuration file loading for chatsutra
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHATSUTRA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./chatsutra.toml` or `./.chatsutra.toml`
//! 4. Global: `<config dir>/chatsutra/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileProviderConfig,
    FileReplConfig, FileRetryConfig, FileStorageConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
