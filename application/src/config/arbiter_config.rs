//! Arbiter configuration.
//!
//! [`ArbiterConfig`] is built once at startup (from files, environment, and
//! CLI flags in the infrastructure/cli layers) and handed to the use case
//! and the inference adapter. Nothing reads process-global state after that.

use magi_domain::{Agent, AgentRole};
use std::time::Duration;

/// Default inference endpoint base; the model identifier is appended.
pub const DEFAULT_ENDPOINT_BASE: &str = "https://api-inference.huggingface.co/models";

/// Environment variable holding the endpoint credential
pub const DEFAULT_CREDENTIAL_ENV: &str = "HF_API_TOKEN";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

pub const DEFAULT_MAX_NEW_TOKENS: u32 = 256;

/// One value per advisory role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerRole<T> {
    pub logic: T,
    pub safety: T,
    pub humanity: T,
}

impl<T> PerRole<T> {
    pub fn from_fn(mut f: impl FnMut(AgentRole) -> T) -> Self {
        Self {
            logic: f(AgentRole::Logic),
            safety: f(AgentRole::Safety),
            humanity: f(AgentRole::Humanity),
        }
    }

    pub fn get(&self, role: AgentRole) -> &T {
        match role {
            AgentRole::Logic => &self.logic,
            AgentRole::Safety => &self.safety,
            AgentRole::Humanity => &self.humanity,
        }
    }

    pub fn get_mut(&mut self, role: AgentRole) -> &mut T {
        match role {
            AgentRole::Logic => &mut self.logic,
            AgentRole::Safety => &mut self.safety,
            AgentRole::Humanity => &mut self.humanity,
        }
    }
}

/// Explicit configuration for the arbiter and its inference adapter.
#[derive(Clone)]
pub struct ArbiterConfig {
    /// Model identifier per role
    pub models: PerRole<String>,
    /// Prompt prefix per role
    pub prompt_prefixes: PerRole<String>,
    /// Bearer credential; `None` sends unauthenticated requests
    pub credential: Option<String>,
    /// Endpoint base URL
    pub endpoint_base: String,
    /// Per-agent timeout used when the caller does not supply one
    pub default_timeout: Duration,
    /// `parameters.max_new_tokens` sent with every request
    pub max_new_tokens: u32,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            models: PerRole::from_fn(|role| role.default_model().to_string()),
            prompt_prefixes: PerRole::from_fn(|role| role.default_prompt_prefix().to_string()),
            credential: None,
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_string(),
            default_timeout: DEFAULT_TIMEOUT,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

// Keeps the credential out of logs.
impl std::fmt::Debug for ArbiterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArbiterConfig")
            .field("models", &self.models)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("endpoint_base", &self.endpoint_base)
            .field("default_timeout", &self.default_timeout)
            .field("max_new_tokens", &self.max_new_tokens)
            .finish_non_exhaustive()
    }
}

impl ArbiterConfig {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, role: AgentRole, model: impl Into<String>) -> Self {
        *self.models.get_mut(role) = model.into();
        self
    }

    pub fn with_prompt_prefix(mut self, role: AgentRole, prefix: impl Into<String>) -> Self {
        *self.prompt_prefixes.get_mut(role) = prefix.into();
        self
    }

    pub fn with_credential(mut self, credential: Option<String>) -> Self {
        self.credential = credential.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn with_endpoint_base(mut self, base: impl Into<String>) -> Self {
        self.endpoint_base = base.into();
        self
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_max_new_tokens(mut self, max: u32) -> Self {
        self.max_new_tokens = max;
        self
    }

    // ==================== Accessors ====================

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// The three agent identities, in role order
    pub fn agents(&self) -> [Agent; 3] {
        AgentRole::ALL.map(|role| {
            Agent::new(
                role,
                self.models.get(role).clone(),
                self.prompt_prefixes.get(role).clone(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ArbiterConfig::default();
        assert_eq!(config.models.logic, "google/flan-t5-large");
        assert_eq!(config.models.safety, "bigscience/bloomz-1b1");
        assert_eq!(config.models.humanity, "google/flan-t5-small");
        assert_eq!(config.endpoint_base, DEFAULT_ENDPOINT_BASE);
        assert_eq!(config.default_timeout, Duration::from_secs(120));
        assert_eq!(config.max_new_tokens, 256);
        assert!(!config.has_credential());
    }

    #[test]
    fn test_builder_methods() {
        let config = ArbiterConfig::default()
            .with_model(AgentRole::Safety, "org/safety-model")
            .with_prompt_prefix(AgentRole::Humanity, "Be kind. ")
            .with_credential(Some("hf_secret".to_string()))
            .with_endpoint_base("http://localhost:8080/models")
            .with_default_timeout(Duration::from_secs(5))
            .with_max_new_tokens(64);

        assert_eq!(config.models.safety, "org/safety-model");
        assert_eq!(config.prompt_prefixes.humanity, "Be kind. ");
        assert_eq!(config.credential.as_deref(), Some("hf_secret"));
        assert_eq!(config.endpoint_base, "http://localhost:8080/models");
        assert_eq!(config.default_timeout, Duration::from_secs(5));
        assert_eq!(config.max_new_tokens, 64);
    }

    #[test]
    fn test_blank_credential_is_none() {
        let config = ArbiterConfig::default().with_credential(Some("  ".to_string()));
        assert!(!config.has_credential());
    }

    #[test]
    fn test_agents_in_role_order() {
        let config = ArbiterConfig::default().with_model(AgentRole::Logic, "custom/logic");
        let agents = config.agents();
        assert_eq!(agents[0].role(), AgentRole::Logic);
        assert_eq!(agents[0].model_identifier(), "custom/logic");
        assert_eq!(agents[1].role(), AgentRole::Safety);
        assert_eq!(agents[2].role(), AgentRole::Humanity);
        assert_eq!(
            agents[2].prompt_prefix(),
            AgentRole::Humanity.default_prompt_prefix()
        );
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = ArbiterConfig::default().with_credential(Some("hf_secret".to_string()));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
