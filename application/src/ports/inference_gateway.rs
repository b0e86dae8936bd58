//! Inference gateway port
//!
//! Defines the interface for sending one prompt to one hosted model.

use async_trait::async_trait;
use magi_domain::ErrorKind;
use thiserror::Error;

/// Errors that can occur during a single inference call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Inference error: {0}")]
    Api(String),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("Unrecognized response shape: {0}")]
    UnrecognizedResponseShape(String),

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    /// Diagnostic category recorded on the agent outcome
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Unauthenticated(_) => ErrorKind::Unauthenticated,
            GatewayError::Timeout => ErrorKind::Timeout,
            GatewayError::UnrecognizedResponseShape(_) => ErrorKind::UnrecognizedResponseShape,
            GatewayError::ConnectionError(_)
            | GatewayError::Status { .. }
            | GatewayError::Api(_)
            | GatewayError::MalformedBody(_) => ErrorKind::TransportFailure,
        }
    }
}

/// Gateway for model inference
///
/// One call to `generate` is one outbound request: implementations must not
/// retry. Deadlines are enforced by the caller, so an implementation only
/// needs to be cancel-safe (dropping the future abandons the request).
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Send `prompt` to `model_identifier` and return the generated text
    async fn generate(&self, model_identifier: &str, prompt: &str) -> Result<String, GatewayError>;
}
