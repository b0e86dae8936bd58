//! Inference endpoint configuration from TOML (`[endpoint]` section)

use magi_application::config::DEFAULT_CREDENTIAL_ENV;
use serde::{Deserialize, Serialize};

/// Raw endpoint configuration from TOML
///
/// # Example
///
/// ```toml
/// [endpoint]
/// base_url = "https://api-inference.huggingface.co/models"
/// api_key_env = "HF_API_TOKEN"
/// max_new_tokens = 256
/// timeout_seconds = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Base URL; the model identifier is appended as a path segment
    pub base_url: Option<String>,
    /// Environment variable to read the credential from
    pub api_key_env: String,
    /// Credential given directly (takes precedence over `api_key_env`)
    pub api_key: Option<String>,
    /// `parameters.max_new_tokens` for every request
    pub max_new_tokens: Option<u32>,
    /// Per-agent timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key_env: DEFAULT_CREDENTIAL_ENV.to_string(),
            api_key: None,
            max_new_tokens: None,
            timeout_seconds: None,
        }
    }
}

impl FileEndpointConfig {
    /// Resolve the credential: `api_key` first, then the named variable.
    ///
    /// Blank values count as unset.
    pub fn resolve_credential(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env(&self.api_key_env).filter(|k| !k.trim().is_empty()))
    }
}
