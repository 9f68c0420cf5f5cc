//! Context injected into a conversation from uploaded documents.

pub mod excerpt;

pub use excerpt::{
    CONTEXT_CHAR_LIMIT, CONTEXT_MESSAGE_PREFIX, ContextExcerpt, DocumentKind,
    UNSUPPORTED_PLACEHOLDER,
};
