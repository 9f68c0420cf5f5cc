//! Progress notification port
//!
//! Defines the interface for reporting what happens while a completion is
//! pending, including the per-attempt retry notices.

use super::completion_gateway::GatewayError;
use chatsutra_domain::ChatModel;
use std::time::Duration;

/// Callback for progress updates during a completion request
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing at all).
pub trait CompletionProgress: Send + Sync {
    /// Called before each attempt (1-based)
    fn on_attempt_start(&self, _model: ChatModel, _attempt: u32, _max_attempts: u32) {}

    /// Called after a transient failure; `delay` is the wait before the next
    /// attempt, or `None` when no attempt is left.
    fn on_retry(
        &self,
        attempt: u32,
        max_attempts: u32,
        delay: Option<Duration>,
        error: &GatewayError,
    );

    /// Called once every attempt has failed transiently
    fn on_unavailable(&self, attempts: u32);

    /// Called when the request finished, whatever the outcome
    fn on_finished(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl CompletionProgress for NoProgress {
    fn on_retry(&self, _: u32, _: u32, _: Option<Duration>, _: &GatewayError) {}
    fn on_unavailable(&self, _attempts: u32) {}
}
