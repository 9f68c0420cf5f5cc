//! File-derived context excerpts.

use crate::core::string::take_chars;
use crate::session::entities::Message;
use std::path::Path;

/// Maximum number of characters of a document injected into a conversation.
pub const CONTEXT_CHAR_LIMIT: usize = 2000;

/// Text injected in place of a document whose kind is not recognized.
pub const UNSUPPORTED_PLACEHOLDER: &str = "Unsupported file type.";

/// Prefix of the system message carrying an excerpt.
pub const CONTEXT_MESSAGE_PREFIX: &str = "Use this context for all future responses:\n\n";

/// Kinds of documents text can be extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    PlainText,
    Csv,
    Pdf,
}

impl DocumentKind {
    /// Detect the kind from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" | "text" | "md" => Some(Self::PlainText),
            "csv" => Some(Self::Csv),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capped text taken from a document (Value Object)
///
/// Never holds more than [`CONTEXT_CHAR_LIMIT`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextExcerpt {
    source: String,
    text: String,
    truncated: bool,
}

impl ContextExcerpt {
    pub fn new(source: impl Into<String>, full_text: &str) -> Self {
        let text = take_chars(full_text, CONTEXT_CHAR_LIMIT);
        Self {
            source: source.into(),
            truncated: text.len() < full_text.len(),
            text: text.to_string(),
        }
    }

    /// Placeholder excerpt for a document of an unknown kind
    pub fn unsupported(source: impl Into<String>) -> Self {
        Self::new(source, UNSUPPORTED_PLACEHOLDER)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the source held more text than the excerpt
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// System message instructing the model to use this excerpt
    pub fn to_system_message(&self) -> Message {
        Message::system(format!("{CONTEXT_MESSAGE_PREFIX}{}", self.text))
    }
}
