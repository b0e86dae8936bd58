//! HuggingFace-style hosted inference adapter
//!
//! - [`HuggingFaceGateway`]: [`InferenceGateway`](magi_application::InferenceGateway) over HTTP
//! - [`response`]: tolerant decoding of the generation response body

pub mod gateway;
pub mod response;

pub use gateway::HuggingFaceGateway;
