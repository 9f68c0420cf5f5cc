//! Names of persisted sessions.
//!
//! A saved session is stored as `<name>.json`. The name is either given by
//! the user or derived from the conversation: the first line of the first
//! user message, sanitized and capped at [`MAX_DERIVED_NAME_CHARS`], or a
//! local timestamp when nobody has spoken yet.

use super::entities::Conversation;
use crate::core::error::DomainError;
use crate::core::string::take_chars;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Upper bound on the length of a derived name, in characters.
pub const MAX_DERIVED_NAME_CHARS: usize = 50;

/// Extension of persisted session records (without the dot).
pub const RECORD_EXTENSION: &str = "json";

/// Format of timestamp-derived names.
pub const TIMESTAMP_NAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Characters that never make it into a file name.
const UNSAFE_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Replace every character that is unsafe in a file name with `_`.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Name of a persisted session (Value Object)
///
/// Always sanitized and non-empty, never carries the record extension.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionName(String);

impl SessionName {
    /// Accept a user supplied name.
    ///
    /// Trailing `.json` suffixes and surrounding whitespace are dropped so
    /// that `notes` and `notes.json` refer to the same record; unsafe
    /// characters are replaced. Parsing a parsed name returns it unchanged,
    /// which keeps file stems and names in step.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let suffix = format!(".{RECORD_EXTENSION}");
        let mut base = raw.trim();
        while let Some(stripped) = base.strip_suffix(&suffix) {
            base = stripped.trim();
        }
        let name = sanitize(base);
        if name.is_empty() {
            return Err(DomainError::InvalidSessionName(raw.to_string()));
        }
        Ok(Self(name))
    }

    /// Derive a name from the conversation content.
    ///
    /// Only the first user message matters; later turns never change the
    /// derived name. `now` is used when there is no usable user message.
    pub fn derive(conversation: &Conversation, now: NaiveDateTime) -> Self {
        let from_user = conversation.first_user_message().and_then(|m| {
            let first_line = m.content.trim().split('\n').next().unwrap_or("").trim_end();
            let sanitized = sanitize(first_line);
            Self::parse(take_chars(&sanitized, MAX_DERIVED_NAME_CHARS)).ok()
        });

        from_user.unwrap_or_else(|| Self::from_timestamp(now))
    }

    /// Timestamp-based name, e.g. `2024-05-01_09-30-00`
    pub fn from_timestamp(now: NaiveDateTime) -> Self {
        Self(now.format(TIMESTAMP_NAME_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the persisted record, e.g. `notes.json`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, RECORD_EXTENSION)
    }
}

impl std::fmt::Display for SessionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SessionName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SessionName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SessionName> for String {
    fn from(name: SessionName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_sanitize_replaces_every_unsafe_character() {
        assert_eq!(sanitize(r#"a\b/c*d?e:f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize("plain name.v2"), "plain name.v2");
    }

    #[test]
    fn test_derive_from_first_user_message() {
        let mut conversation = Conversation::default();
        conversation.add_user_message("Hello/World:test");
        conversation.add_assistant_message("hi");
        conversation.add_user_message("Something else entirely");

        let name = SessionName::derive(&conversation, fixed_now());
        assert_eq!(name.as_str(), "Hello_World_test");
        assert_eq!(name.file_name(), "Hello_World_test.json");
    }

    #[test]
    fn test_derive_uses_first_line_only() {
        let mut conversation = Conversation::default();
        conversation.add_user_message("  \n  Title line\r\nbody text\nmore");
        let name = SessionName::derive(&conversation, fixed_now());
        assert_eq!(name.as_str(), "Title line");
    }

    #[test]
    fn test_derive_caps_at_fifty_characters() {
        let mut conversation = Conversation::default();
        conversation.add_user_message("x".repeat(120));
        let name = SessionName::derive(&conversation, fixed_now());
        assert_eq!(name.as_str().chars().count(), MAX_DERIVED_NAME_CHARS);

        let mut wide = Conversation::default();
        wide.add_user_message("日本語".repeat(30));
        let name = SessionName::derive(&wide, fixed_now());
        assert_eq!(name.as_str().chars().count(), MAX_DERIVED_NAME_CHARS);
    }

    #[test]
    fn test_derive_falls_back_to_timestamp() {
        let conversation = Conversation::default();
        let name = SessionName::derive(&conversation, fixed_now());
        assert_eq!(name.as_str(), "2024-05-01_09-30-00");

        let mut blank = Conversation::default();
        blank.add_user_message("   ");
        assert_eq!(
            SessionName::derive(&blank, fixed_now()).as_str(),
            "2024-05-01_09-30-00"
        );
    }

    #[test]
    fn test_parse_strips_extension_and_sanitizes() {
        assert_eq!(SessionName::parse("notes.json").unwrap().as_str(), "notes");
        assert_eq!(SessionName::parse(" a/b ").unwrap().as_str(), "a_b");
        assert_eq!(
            SessionName::parse("../etc/passwd").unwrap().as_str(),
            ".._etc_passwd"
        );
    }

    #[test]
    fn test_derived_name_survives_parse() {
        let mut spaced = Conversation::default();
        spaced.add_user_message(format!("{} tail", "x".repeat(49)));
        let name = SessionName::derive(&spaced, fixed_now());
        assert_eq!(name.as_str(), "x".repeat(49));

        let mut extension = Conversation::default();
        extension.add_user_message("report.json");
        let name = SessionName::derive(&extension, fixed_now());
        assert_eq!(name.as_str(), "report");

        for name in [name, SessionName::parse("a.json .json").unwrap()] {
            assert_eq!(SessionName::parse(name.as_str()).unwrap(), name);
        }
    }

    #[test]
    fn test_derive_extension_only_falls_back_to_timestamp() {
        let mut conversation = Conversation::default();
        conversation.add_user_message(".json");
        assert_eq!(
            SessionName::derive(&conversation, fixed_now()).as_str(),
            "2024-05-01_09-30-00"
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(SessionName::parse("").is_err());
        assert!(SessionName::parse("   ").is_err());
        assert!(SessionName::parse(".json").is_err());
    }
}
