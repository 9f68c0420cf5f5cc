//! Slash command parsing for the chat REPL

use std::path::PathBuf;

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    New,
    End,
    Resume,
    /// Show the active model, or switch to the named one
    Model(Option<String>),
    Models,
    Context(PathBuf),
    Save(Option<String>),
    List,
    Load(String),
    Delete(String),
    Export(Option<PathBuf>),
    History,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a line starting with `/`.
    ///
    /// Returns a user-facing message when the command is unknown or is
    /// missing its argument.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim()).filter(|a| !a.is_empty())),
            None => (line, None),
        };
        let required = |usage: &str| {
            arg.map(str::to_string)
                .ok_or_else(|| format!("Usage: {}", usage))
        };

        Ok(match name {
            "/new" => Self::New,
            "/end" => Self::End,
            "/resume" => Self::Resume,
            "/model" => Self::Model(arg.map(str::to_string)),
            "/models" => Self::Models,
            "/context" => Self::Context(PathBuf::from(required("/context <path>")?)),
            "/save" => Self::Save(arg.map(str::to_string)),
            "/list" | "/ls" => Self::List,
            "/load" => Self::Load(required("/load <name>")?),
            "/delete" | "/rm" => Self::Delete(required("/delete <name>")?),
            "/export" => Self::Export(arg.map(PathBuf::from)),
            "/history" => Self::History,
            "/help" | "/h" | "/?" => Self::Help,
            "/quit" | "/exit" | "/q" => Self::Quit,
            _ => {
                return Err(format!(
                    "Unknown command: {}\nType /help for available commands",
                    name
                ));
            }
        })
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  /new              - Start a new conversation
  /end              - End the chat (messages are refused)
  /resume           - Resume an ended chat
  /model [NAME]     - Show or switch the model
  /models           - List available models
  /context PATH     - Add a .txt, .md, .csv or .pdf file as context
  /save [NAME]      - Save the conversation (named after the first message by default)
  /list             - List saved conversations
  /load NAME        - Load a saved conversation
  /delete NAME      - Delete a saved conversation
  /export [PATH]    - Write the transcript to a text file
  /history          - Show the conversation so far
  /help, /h, /?     - Show this help
  /quit, /exit, /q  - Exit chat";
