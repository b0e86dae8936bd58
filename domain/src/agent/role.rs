//! Advisory roles
//!
//! Every decision is put to the same three roles, always in the same order.
//! The order is part of the output contract: verdicts list outcomes as
//! Logic, Safety, Humanity no matter which agent answered first.

use serde::{Deserialize, Serialize};

/// One of the three fixed advisory roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    /// MELCHIOR - logical analysis
    Logic,
    /// BALTHASAR - pragmatic and safety concerns
    Safety,
    /// CASPER - empathy and intuition
    Humanity,
}

impl AgentRole {
    /// All roles in verdict order
    pub const ALL: [AgentRole; 3] = [AgentRole::Logic, AgentRole::Safety, AgentRole::Humanity];

    /// Position of this role in a verdict's outcome list
    pub fn index(&self) -> usize {
        match self {
            AgentRole::Logic => 0,
            AgentRole::Safety => 1,
            AgentRole::Humanity => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Logic => "logic",
            AgentRole::Safety => "safety",
            AgentRole::Humanity => "humanity",
        }
    }

    /// Codename used in prompts and console output
    pub fn codename(&self) -> &'static str {
        match self {
            AgentRole::Logic => "MELCHIOR",
            AgentRole::Safety => "BALTHASAR",
            AgentRole::Humanity => "CASPER",
        }
    }

    /// Default inference model for this role
    pub fn default_model(&self) -> &'static str {
        match self {
            AgentRole::Logic => "google/flan-t5-large",
            AgentRole::Safety => "bigscience/bloomz-1b1",
            AgentRole::Humanity => "google/flan-t5-small",
        }
    }

    /// Default prompt prefix; the question is appended verbatim.
    pub fn default_prompt_prefix(&self) -> &'static str {
        match self {
            AgentRole::Logic => {
                "You are MELCHIOR, a purely logical analyst. Answer succinctly and conclude with 'DECISION: [YES/NO]'.\n\nQuestion: "
            }
            AgentRole::Safety => {
                "You are BALTHASAR, a protective and pragmatic advisor. Answer with practical concerns and conclude with 'DECISION: [YES/NO]'.\n\nQuestion: "
            }
            AgentRole::Humanity => {
                "You are CASPER, an empathetic and intuitive advisor. Speak from the heart and conclude with 'DECISION: [YES/NO]'.\n\nQuestion: "
            }
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
