//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod completion_gateway;
pub mod context_extractor;
pub mod conversation_logger;
pub mod progress;
pub mod session_repository;
