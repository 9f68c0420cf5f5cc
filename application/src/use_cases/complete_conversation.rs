//! Complete Conversation use case.
//!
//! Obtains an assistant reply for the whole conversation, tolerating
//! temporary unavailability of the provider:
//!
//! ```text
//! attempt 1 ── 503 ──> wait delay ──> attempt 2 ── 503 ──> ... attempt N ── 503 ──> None
//!     │                                   │
//!     └── ok ──> Some(text)               └── 4xx / parse error ──> Err (no retry)
//! ```

use crate::chat_session::ChatSession;
use crate::config::RetryPolicy;
use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::CompletionProgress;
use chatsutra_domain::core::string::truncate;
use chatsutra_domain::{ChatModel, Conversation};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur when sending a user message
#[derive(Error, Debug)]
pub enum SendMessageError {
    #[error("Chat has ended. Use /resume to continue.")]
    ChatEnded,

    #[error("Message is empty")]
    EmptyMessage,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Result of one user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The assistant replied; the reply was appended to the conversation.
    Answered(String),
    /// Every attempt hit temporary unavailability; nothing was appended.
    Unavailable,
}

/// Use case for completing a conversation with bounded retry.
#[derive(Clone)]
pub struct CompleteConversationUseCase {
    gateway: Arc<dyn CompletionGateway>,
    policy: RetryPolicy,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl CompleteConversationUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            gateway,
            policy: RetryPolicy::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Request a reply for the full conversation.
    ///
    /// Returns `Ok(None)` when every attempt failed with a transient error.
    /// Permanent errors are returned on first sight. The conversation is
    /// never modified.
    pub async fn execute(
        &self,
        conversation: &Conversation,
        model: ChatModel,
        progress: &dyn CompletionProgress,
    ) -> Result<Option<String>, GatewayError> {
        let max_attempts = self.policy.max_attempts();
        let delay = self.policy.delay();

        debug!(
            "Requesting completion from {} ({} messages, up to {} attempts)",
            model,
            conversation.len(),
            max_attempts
        );

        let mut attempt = 0;
        while attempt < max_attempts {
            attempt += 1;
            progress.on_attempt_start(model, attempt, max_attempts);

            match self.gateway.complete(model, conversation.messages()).await {
                Ok(text) => {
                    info!("Completion from {} succeeded on attempt {}", model, attempt);
                    progress.on_finished();
                    return Ok(Some(text));
                }
                Err(e) if e.is_transient() => {
                    warn!(
                        "Completion attempt {}/{} unavailable: {}",
                        attempt, max_attempts, e
                    );
                    let next_delay = (attempt < max_attempts).then_some(delay);
                    progress.on_retry(attempt, max_attempts, next_delay, &e);
                    if let Some(wait) = next_delay {
                        tokio::time::sleep(wait).await;
                    }
                }
                Err(e) => {
                    warn!("Completion from {} failed permanently: {}", model, e);
                    progress.on_finished();
                    return Err(e);
                }
            }
        }

        warn!(
            "Completion service unavailable after {} attempts",
            max_attempts
        );
        progress.on_unavailable(max_attempts);
        progress.on_finished();
        Ok(None)
    }

    /// Run one user turn against the session.
    ///
    /// The user message is appended first; the assistant reply is appended
    /// only when one was obtained. On unavailability or a permanent error the
    /// conversation keeps the user message and nothing else.
    pub async fn send(
        &self,
        session: &mut ChatSession,
        text: &str,
        progress: &dyn CompletionProgress,
    ) -> Result<TurnOutcome, SendMessageError> {
        if !session.is_chat_enabled() {
            return Err(SendMessageError::ChatEnded);
        }
        if text.trim().is_empty() {
            return Err(SendMessageError::EmptyMessage);
        }

        let model = session.model();
        session.conversation_mut().add_user_message(text);
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({
                "model": model.as_str(),
                "bytes": text.len(),
                "text": text,
            }),
        ));

        match self.execute(session.conversation(), model, progress).await {
            Ok(Some(reply)) => {
                debug!("Assistant replied: {}", truncate(&reply, 80));
                self.conversation_logger.log(ConversationEvent::new(
                    "assistant_response",
                    serde_json::json!({
                        "model": model.as_str(),
                        "bytes": reply.len(),
                        "text": reply,
                    }),
                ));
                session.conversation_mut().add_assistant_message(reply.clone());
                Ok(TurnOutcome::Answered(reply))
            }
            Ok(None) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "completion_unavailable",
                    serde_json::json!({
                        "model": model.as_str(),
                        "attempts": self.policy.max_attempts(),
                    }),
                ));
                Ok(TurnOutcome::Unavailable)
            }
            Err(e) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "completion_error",
                    serde_json::json!({
                        "model": model.as_str(),
                        "error": e.to_string(),
                    }),
                ));
                Err(e.into())
            }
        }
    }
}
