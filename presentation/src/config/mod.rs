//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior, resolved by the
//! binary from the merged file configuration and CLI flags.

use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Force colored output on or off; auto-detected when `None`
    pub color: Option<bool>,
}

impl OutputConfig {
    /// Apply the color setting process-wide
    pub fn apply(&self) {
        if let Some(color) = self.color {
            colored::control::set_override(color);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the spinner while a completion is pending
    pub show_progress: bool,
    /// Line-editor history file; history is not persisted when unset
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
