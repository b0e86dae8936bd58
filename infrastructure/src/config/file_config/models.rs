//! Per-role model configuration from TOML (`[models]` section)

use magi_domain::AgentRole;
use serde::{Deserialize, Serialize};

/// Per-role model identifiers from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// logic = "google/flan-t5-large"     # MELCHIOR
/// safety = "bigscience/bloomz-1b1"   # BALTHASAR
/// humanity = "google/flan-t5-small"  # CASPER
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub logic: Option<String>,
    pub safety: Option<String>,
    pub humanity: Option<String>,
}

impl FileModelsConfig {
    /// Configured model for a role, if any
    pub fn model_for(&self, role: AgentRole) -> Option<&str> {
        match role {
            AgentRole::Logic => self.logic.as_deref(),
            AgentRole::Safety => self.safety.as_deref(),
            AgentRole::Humanity => self.humanity.as_deref(),
        }
    }

    /// First role whose configured model identifier is blank
    pub fn first_empty(&self) -> Option<AgentRole> {
        AgentRole::ALL
            .into_iter()
            .find(|&role| self.model_for(role).is_some_and(|m| m.trim().is_empty()))
    }
}
