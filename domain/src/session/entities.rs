//! Session domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Instruction every fresh conversation starts with.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// An ordered chat transcript (Entity)
///
/// The message order is the literal payload sent to the completion endpoint.
/// Messages are only ever appended; [`reset`](Self::reset) replaces the whole
/// transcript with a single system message.
///
/// Serializes as a bare JSON array of `{role, content}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create a conversation holding only the given system instruction
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Rebuild a conversation from persisted messages.
    ///
    /// An empty message list is rejected: every conversation carries at
    /// least its opening instruction.
    pub fn from_messages(messages: Vec<Message>) -> Result<Self, DomainError> {
        if messages.is_empty() {
            return Err(DomainError::EmptyConversation);
        }
        Ok(Self { messages })
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.push(Message::user(content));
    }

    pub fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.push(Message::assistant(content));
    }

    pub fn add_system_message(&mut self, content: impl Into<String>) {
        self.push(Message::system(content));
    }

    /// Drop every message and start over from a single system instruction
    pub fn reset(&mut self, system_prompt: impl Into<String>) {
        self.messages.clear();
        self.messages.push(Message::system(system_prompt));
    }

    /// First message authored by the user, if any
    pub fn first_user_message(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.role == Role::User)
    }

    /// Messages shown to the user (system messages are hidden)
    pub fn visible_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_conversation_has_single_system_message() {
        let conversation = Conversation::default();
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].role, Role::System);
        assert_eq!(conversation.messages()[0].content, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn test_appends_preserve_order() {
        let mut conversation = Conversation::default();
        conversation.add_user_message("hi");
        conversation.add_assistant_message("hello");
        conversation.add_system_message("context");

        let roles: Vec<Role> = conversation.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::System]
        );
    }

    #[test]
    fn test_reset_leaves_exactly_one_system_message() {
        let mut conversation = Conversation::default();
        conversation.add_user_message("a");
        conversation.add_assistant_message("b");
        conversation.reset("Be terse.");

        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0], Message::system("Be terse."));
    }

    #[test]
    fn test_first_user_message_ignores_later_turns() {
        let mut conversation = Conversation::default();
        assert!(conversation.first_user_message().is_none());
        conversation.add_user_message("first");
        conversation.add_user_message("second");
        assert_eq!(conversation.first_user_message().unwrap().content, "first");
    }

    #[test]
    fn test_serializes_as_role_content_array() {
        let mut conversation = Conversation::default();
        conversation.add_user_message("hi");
        let json = serde_json::to_value(&conversation).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"role": "system", "content": DEFAULT_SYSTEM_PROMPT},
                {"role": "user", "content": "hi"}
            ])
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_role() {
        let raw = r#"[{"role": "tool", "content": "x"}]"#;
        assert!(serde_json::from_str::<Conversation>(raw).is_err());
    }

    #[test]
    fn test_from_messages_rejects_empty() {
        assert_eq!(
            Conversation::from_messages(vec![]).unwrap_err(),
            DomainError::EmptyConversation
        );
        let c = Conversation::from_messages(vec![Message::user("x")]).unwrap();
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_visible_messages_skip_system() {
        let mut conversation = Conversation::default();
        conversation.add_system_message("ctx");
        conversation.add_user_message("q");
        conversation.add_assistant_message("a");
        let visible: Vec<&str> = conversation
            .visible_messages()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(visible, vec!["q", "a"]);
    }
}
