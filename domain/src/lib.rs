//! Domain layer for chatsutra
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Conversation**: the ordered, append-only transcript sent to the model.
//!   It always opens with a system instruction.
//! - **Session name**: the name a conversation is persisted under, derived
//!   from the first user message when not given.
//! - **Context excerpt**: capped text extracted from an uploaded document and
//!   injected as a system message.

pub mod config;
pub mod context;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use context::{
    CONTEXT_CHAR_LIMIT, ContextExcerpt, DocumentKind, UNSUPPORTED_PLACEHOLDER,
};
pub use core::{error::DomainError, model::ChatModel};
pub use session::{
    entities::{Conversation, DEFAULT_SYSTEM_PROMPT, Message, Role},
    name::{MAX_DERIVED_NAME_CHARS, SessionName, sanitize},
    transcript::render_transcript,
};
