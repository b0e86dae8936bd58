//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod endpoint;
mod models;
mod output;
mod prompts;

pub use endpoint::FileEndpointConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use prompts::FilePromptsConfig;

use magi_application::ArbiterConfig;
use magi_domain::AgentRole;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("endpoint.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("endpoint.max_new_tokens cannot be 0")]
    InvalidMaxNewTokens,

    #[error("endpoint.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("models.{0}: model name cannot be empty")]
    EmptyModelName(AgentRole),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Per-role model selection
    pub models: FileModelsConfig,
    /// Per-role prompt prefix overrides
    pub prompts: FilePromptsConfig,
    /// Inference endpoint settings
    pub endpoint: FileEndpointConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.endpoint.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if let Some(0) = self.endpoint.max_new_tokens {
            return Err(ConfigValidationError::InvalidMaxNewTokens);
        }

        if self
            .endpoint
            .base_url
            .as_ref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if let Some(role) = self.models.first_empty() {
            return Err(ConfigValidationError::EmptyModelName(role));
        }

        Ok(())
    }

    /// Build the application config, reading the credential from the
    /// process environment.
    pub fn to_arbiter_config(&self) -> ArbiterConfig {
        self.to_arbiter_config_with_env(|key| std::env::var(key).ok())
    }

    /// Build the application config with an explicit environment lookup
    pub fn to_arbiter_config_with_env(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> ArbiterConfig {
        let mut config = ArbiterConfig::default();

        for role in AgentRole::ALL {
            if let Some(model) = self.models.model_for(role) {
                config = config.with_model(role, model);
            }
            if let Some(prefix) = self.prompts.prefix_for(role) {
                config = config.with_prompt_prefix(role, prefix);
            }
        }

        if let Some(base_url) = &self.endpoint.base_url {
            config = config.with_endpoint_base(base_url.clone());
        }
        if let Some(max) = self.endpoint.max_new_tokens {
            config = config.with_max_new_tokens(max);
        }
        if let Some(secs) = self.endpoint.timeout_seconds {
            config = config.with_default_timeout(Duration::from_secs(secs));
        }

        let credential = self.endpoint.resolve_credential(env);
        if credential.is_none() {
            warn!(
                env = %self.endpoint.api_key_env,
                "No inference credential configured; requests will be unauthenticated"
            );
        }
        config.with_credential(credential)
    }
}
