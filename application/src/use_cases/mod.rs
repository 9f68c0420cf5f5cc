//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod attach_context;
pub mod complete_conversation;
pub mod manage_sessions;
