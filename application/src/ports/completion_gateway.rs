//! Completion Gateway port
//!
//! Defines the interface for obtaining an assistant reply from a hosted
//! chat-completion service.

use async_trait::async_trait;
use chatsutra_domain::{ChatModel, Message};
use thiserror::Error;

/// Errors that can occur during a completion request
///
/// Only [`GatewayError::ServiceUnavailable`] is transient; every other
/// variant is permanent and must not be retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Request rejected (HTTP {status}): {message}")]
    RequestRejected { status: u16, message: String },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API key not set: export {0}")]
    MissingApiKey(String),
}

impl GatewayError {
    /// Whether the service only signalled temporary unavailability
    pub fn is_transient(&self) -> bool {
        matches!(self, GatewayError::ServiceUnavailable(_))
    }
}

/// Gateway for chat completions
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send the full ordered message list and return the reply text.
    ///
    /// Performs exactly one request; retrying is the caller's business.
    async fn complete(&self, model: ChatModel, messages: &[Message])
    -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unavailability_is_transient() {
        assert!(GatewayError::ServiceUnavailable("503".into()).is_transient());
        assert!(
            !GatewayError::RequestRejected {
                status: 401,
                message: "bad key".into()
            }
            .is_transient()
        );
        assert!(!GatewayError::ConnectionError("refused".into()).is_transient());
        assert!(!GatewayError::InvalidResponse("no choices".into()).is_transient());
        assert!(!GatewayError::MissingApiKey("GROQ_API_KEY".into()).is_transient());
    }

    #[test]
    fn test_rejected_display() {
        let err = GatewayError::RequestRejected {
            status: 404,
            message: "model not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Request rejected (HTTP 404): model not found"
        );
    }
}
