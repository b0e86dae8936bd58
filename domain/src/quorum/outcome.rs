//! Per-agent outcome record

use super::parsing::parse_decision;
use super::vote::Vote;
use crate::agent::Agent;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why an agent call produced no response text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The call did not complete before its deadline
    Timeout,
    /// Connection failure, non-2xx status, or malformed body
    TransportFailure,
    /// The body parsed but matched none of the known response shapes
    UnrecognizedResponseShape,
    /// The endpoint refused the credential (or its absence)
    Unauthenticated,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Timeout => "timeout",
            ErrorKind::TransportFailure => "transport_failure",
            ErrorKind::UnrecognizedResponseShape => "unrecognized_response_shape",
            ErrorKind::Unauthenticated => "unauthenticated",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one agent call attempt.
///
/// Exactly one of `raw_text` and `error` is set. A failed call always
/// votes [`Vote::Abstain`]; a successful call whose text has no usable
/// marker also abstains, but with `error` empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentOutcome {
    agent: Agent,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_text: Option<String>,
    vote: Vote,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    elapsed_ms: u64,
}

impl AgentOutcome {
    /// The agent answered; the vote is parsed from its text
    pub fn responded(agent: Agent, raw_text: impl Into<String>, elapsed: Duration) -> Self {
        let raw_text = raw_text.into();
        let vote = parse_decision(&raw_text);
        Self {
            agent,
            raw_text: Some(raw_text),
            vote,
            error: None,
            detail: None,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    /// The call failed; the agent abstains
    pub fn failed(
        agent: Agent,
        error: ErrorKind,
        detail: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            agent,
            raw_text: None,
            vote: Vote::Abstain,
            error: Some(error),
            detail: Some(detail.into()),
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    pub fn vote(&self) -> Vote {
        self.vote
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Human-readable failure message, if the call failed
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// The agent answered, but without a usable decision marker
    pub fn is_parse_failure(&self) -> bool {
        self.is_success() && self.vote.is_abstain()
    }
}
