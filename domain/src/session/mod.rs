//! Chat session domain.
//!
//! - [`entities::Conversation`]: the ordered transcript sent to the model
//! - [`entities::Message`]: a single role-tagged message
//! - [`name::SessionName`]: name of a persisted conversation
//! - [`transcript::render_transcript`]: plain text export

pub mod entities;
pub mod name;
pub mod transcript;
