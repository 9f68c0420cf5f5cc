//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ChatModel`]: the closed allow-list of hosted chat models
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod string;
