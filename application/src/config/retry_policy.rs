//! Retry policy for completion requests.
//!
//! [`RetryPolicy`] is a fixed attempt count and a fixed delay: no backoff
//! growth, no jitter.

use std::time::Duration;

/// Fixed-count, fixed-delay retry policy.
///
/// `max_attempts` counts every request, the first one included, and is
/// never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
