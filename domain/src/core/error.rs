//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown model: {0} (allowed: llama3-8b-8192, llama3-70b-8192, deepseek-r1-distill-llama-70b)")]
    UnknownModel(String),

    #[error("Invalid session name: {0:?}")]
    InvalidSessionName(String),

    #[error("Conversation has no messages")]
    EmptyConversation,
}
