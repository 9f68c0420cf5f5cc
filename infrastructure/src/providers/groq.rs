//! Groq chat-completion adapter.
//!
//! Speaks the OpenAI-compatible `POST {base_url}/chat/completions` wire
//! format. One call is one HTTP request; retrying lives in the application
//! layer, which only needs to know whether a failure was transient.

use async_trait::async_trait;
use chatsutra_application::ports::completion_gateway::{CompletionGateway, GatewayError};
use chatsutra_domain::{ChatModel, Message};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default base URL of the Groq OpenAI-compatible API.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Completion gateway for the Groq API
pub struct GroqCompletionGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GroqCompletionGateway {
    /// Build a gateway with an explicit key.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Build a gateway reading the key from `api_key_env`.
    ///
    /// There is no fallback key: an unset or empty variable is an error.
    pub fn from_env(
        api_key_env: &str,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GatewayError::MissingApiKey(api_key_env.to_string()))?;
        Self::new(api_key, base_url, timeout)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// Map a non-success HTTP reply onto the gateway error taxonomy.
fn classify_failure(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    if status == StatusCode::SERVICE_UNAVAILABLE
        || body.to_ascii_lowercase().contains("service unavailable")
    {
        return GatewayError::ServiceUnavailable(format!("HTTP {}: {}", status.as_u16(), message));
    }

    GatewayError::RequestRejected {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl CompletionGateway for GroqCompletionGateway {
    async fn complete(
        &self,
        model: ChatModel,
        messages: &[Message],
    ) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: model.as_str(),
            messages,
        };

        debug!(
            "POST {} (model={}, messages={})",
            self.endpoint(),
            model,
            messages.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_failure(status, &body));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GatewayError::InvalidResponse("response has no message content".into()))
    }
}
