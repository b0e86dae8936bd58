//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod decide;
pub mod invoke_agent;
