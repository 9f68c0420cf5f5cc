//! Conversation log port.
//!
//! Chat turns and session housekeeping (context attached, saved, loaded,
//! deleted) are reported as [`ConversationEvent`]s. An adapter may append
//! them to a machine-readable log; `tracing` output stays separate and is
//! meant for people reading diagnostics.

use serde_json::Value;

/// One entry of the conversation log.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    /// Short snake_case tag such as `user_message` or `session_saved`.
    pub kind: &'static str,
    /// Event fields; an object in every event this crate emits.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(kind: &'static str, payload: Value) -> Self {
        Self { kind, payload }
    }
}

/// Sink for conversation events.
///
/// Recording must never interrupt the chat, so `log` returns nothing and
/// adapters drop records they cannot write.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event; used when no conversation log is configured.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
