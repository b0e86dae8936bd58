//! Vote primitive

use serde::{Deserialize, Serialize};

/// A single agent's three-valued vote
///
/// `Abstain` covers both "the agent answered but gave no usable decision"
/// and "the agent could not be reached"; [`AgentOutcome`](super::AgentOutcome)
/// keeps the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Vote {
    Yes,
    No,
    #[default]
    Abstain,
}

impl Vote {
    /// Interpret a decision token; anything but YES/NO abstains
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("yes") {
            Vote::Yes
        } else if token.eq_ignore_ascii_case("no") {
            Vote::No
        } else {
            Vote::Abstain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Yes => "YES",
            Vote::No => "NO",
            Vote::Abstain => "ABSTAIN",
        }
    }

    /// Symbol used in compact vote summaries (e.g. "[●●○]")
    pub fn symbol(&self) -> char {
        match self {
            Vote::Yes => '●',
            Vote::No => '○',
            Vote::Abstain => '·',
        }
    }

    pub fn is_abstain(&self) -> bool {
        matches!(self, Vote::Abstain)
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
