//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a validated question to put to the agents
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
