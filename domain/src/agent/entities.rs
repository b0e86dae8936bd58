//! Agent identity

use super::role::AgentRole;
use crate::core::question::Question;
use serde::Serialize;

/// An advisory agent: a role bound to a model and a prompt style.
///
/// Built once when the arbiter is constructed and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    role: AgentRole,
    model_identifier: String,
    #[serde(skip)]
    prompt_prefix: String,
}

impl Agent {
    pub fn new(
        role: AgentRole,
        model_identifier: impl Into<String>,
        prompt_prefix: impl Into<String>,
    ) -> Self {
        Self {
            role,
            model_identifier: model_identifier.into(),
            prompt_prefix: prompt_prefix.into(),
        }
    }

    /// Agent with the role's default model and prompt prefix
    pub fn with_defaults(role: AgentRole) -> Self {
        Self::new(role, role.default_model(), role.default_prompt_prefix())
    }

    pub fn role(&self) -> AgentRole {
        self.role
    }

    pub fn model_identifier(&self) -> &str {
        &self.model_identifier
    }

    pub fn prompt_prefix(&self) -> &str {
        &self.prompt_prefix
    }

    pub fn codename(&self) -> &'static str {
        self.role.codename()
    }

    /// Build the prompt sent to the model: prefix followed by the question
    pub fn prompt_for(&self, question: &Question) -> String {
        format!("{}{}", self.prompt_prefix, question.content())
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.role.codename(), self.model_identifier)
    }
}
