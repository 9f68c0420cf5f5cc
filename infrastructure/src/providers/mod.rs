//! Chat-completion provider adapters.

mod groq;

pub use groq::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, GroqCompletionGateway};
