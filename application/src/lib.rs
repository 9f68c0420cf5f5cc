//! Application layer for chatsutra
//!
//! This crate contains use cases, port definitions, the live chat session
//! and application configuration. It depends only on the domain layer.

pub mod chat_session;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use chat_session::ChatSession;
pub use config::RetryPolicy;
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    context_extractor::{ContextError, ContextExtractorPort},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{CompletionProgress, NoProgress},
    session_repository::{SessionRepository, SessionStoreError},
};
pub use use_cases::attach_context::AttachContextUseCase;
pub use use_cases::complete_conversation::{
    CompleteConversationUseCase, SendMessageError, TurnOutcome,
};
pub use use_cases::manage_sessions::{ManageSessionsError, ManageSessionsUseCase};
