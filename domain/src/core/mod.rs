//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the chat model that answers the citizen
//! - [`question::Question`]: a submitted, non-blank question
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;
