//! Application layer for magi-arbiter
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ArbiterConfig;
pub use ports::{
    decision_maker::DecisionMaker,
    inference_gateway::{GatewayError, InferenceGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::decide::{DecideError, DecideUseCase};
pub use use_cases::invoke_agent::AgentClient;
