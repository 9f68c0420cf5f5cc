//! Presentation layer for chatsutra
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, CommandAction, ReplCommand};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::{ConsoleFormatter, UNAVAILABLE_NOTICE};
pub use output::export::{default_export_file_name, export_transcript};
pub use progress::reporter::{CompletionReporter, SimpleProgress};
