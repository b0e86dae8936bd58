//! Domain layer for magi-arbiter
//!
//! This crate contains the core decision logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Agents
//!
//! Three fixed advisory roles answer every question:
//!
//! - **MELCHIOR** ([`AgentRole::Logic`]): logical analysis
//! - **BALTHASAR** ([`AgentRole::Safety`]): pragmatic and safety concerns
//! - **CASPER** ([`AgentRole::Humanity`]): empathy and intuition
//!
//! ## Quorum
//!
//! Each agent's free-form answer is reduced to a [`Vote`] by
//! [`parse_decision`]. Two matching votes pass or reject; anything else is
//! inconclusive. See [`quorum`] for details.

pub mod agent;
pub mod config;
pub mod core;
pub mod quorum;

// Re-export commonly used types
pub use agent::{Agent, AgentRole};
pub use config::OutputFormat;
pub use core::{error::DomainError, question::Question};
pub use quorum::{
    AgentOutcome, ErrorKind, Tally, Verdict, VerdictResult, Vote, parse_decision,
};
