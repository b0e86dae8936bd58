//! Per-role prompt prefixes from TOML (`[prompts]` section)

use magi_domain::AgentRole;
use serde::{Deserialize, Serialize};

/// Prompt prefix overrides; unset roles keep their built-in persona.
///
/// The question text is appended directly to the prefix, so a prefix
/// normally ends with `"Question: "`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    pub logic: Option<String>,
    pub safety: Option<String>,
    pub humanity: Option<String>,
}

impl FilePromptsConfig {
    pub fn prefix_for(&self, role: AgentRole) -> Option<&str> {
        match role {
            AgentRole::Logic => self.logic.as_deref(),
            AgentRole::Safety => self.safety.as_deref(),
            AgentRole::Humanity => self.humanity.as_deref(),
        }
    }
}
