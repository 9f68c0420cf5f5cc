//! Application-level configuration.
//!
//! - [`RetryPolicy`]: attempt count and delay for completion requests

pub mod retry_policy;

pub use retry_policy::RetryPolicy;
