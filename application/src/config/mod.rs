//! Application-level configuration.
//!
//! - [`ArbiterConfig`] — models, prompts, credential, endpoint, and timeouts

pub mod arbiter_config;

pub use arbiter_config::{
    ArbiterConfig, DEFAULT_CREDENTIAL_ENV, DEFAULT_ENDPOINT_BASE, DEFAULT_MAX_NEW_TOKENS,
    DEFAULT_TIMEOUT, PerRole,
};
