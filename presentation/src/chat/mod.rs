//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface.

mod command;
mod repl;

pub use command::{HELP_TEXT, ReplCommand};
pub use repl::{ChatRepl, CommandAction};
