//! Infrastructure layer for magi-arbiter
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod huggingface;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEndpointConfig, FileModelsConfig,
    FileOutputConfig, FilePromptsConfig,
};
pub use huggingface::HuggingFaceGateway;
