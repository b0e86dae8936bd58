//! Quorum rule: majority of three
//!
//! Two matching non-abstain votes decide. Anything short of that,
//! including a 1/1/1 split, is inconclusive; there is no tie-break.

use super::vote::Vote;
use serde::{Deserialize, Serialize};

/// Matching votes needed to pass or reject
pub const QUORUM: usize = 2;

/// Vote counts for one decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    pub yes: usize,
    pub no: usize,
    pub abstain: usize,
}

impl Tally {
    /// Count votes
    pub fn from_votes(votes: impl IntoIterator<Item = Vote>) -> Self {
        votes.into_iter().fold(Self::default(), |mut tally, vote| {
            match vote {
                Vote::Yes => tally.yes += 1,
                Vote::No => tally.no += 1,
                Vote::Abstain => tally.abstain += 1,
            }
            tally
        })
    }

    pub fn total(&self) -> usize {
        self.yes + self.no + self.abstain
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "yes: {}, no: {}, abstain: {}",
            self.yes, self.no, self.abstain
        )
    }
}

/// Final ternary decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerdictResult {
    Passed,
    Rejected,
    Inconclusive,
}

impl VerdictResult {
    /// Classify a tally under the quorum rule
    pub fn from_tally(tally: &Tally) -> Self {
        if tally.yes >= QUORUM {
            VerdictResult::Passed
        } else if tally.no >= QUORUM {
            VerdictResult::Rejected
        } else {
            VerdictResult::Inconclusive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictResult::Passed => "PASSED",
            VerdictResult::Rejected => "REJECTED",
            VerdictResult::Inconclusive => "INCONCLUSIVE",
        }
    }
}

impl std::fmt::Display for VerdictResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
