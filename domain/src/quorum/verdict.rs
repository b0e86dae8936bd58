//! Verdict: the reduced decision plus the full per-agent record

use super::outcome::AgentOutcome;
use super::rule::{Tally, VerdictResult};
use crate::agent::AgentRole;
use crate::core::question::Question;
use serde::Serialize;

/// Aggregate decision of the three agents.
///
/// Outcomes are always ordered Logic, Safety, Humanity. The tally and
/// result are derived from the outcomes at construction and cannot drift.
///
/// # Example
///
/// ```
/// use magi_domain::{Agent, AgentOutcome, AgentRole, Question, Verdict, VerdictResult};
/// use std::time::Duration;
///
/// let answer = |role, text: &str| {
///     AgentOutcome::responded(Agent::with_defaults(role), text, Duration::ZERO)
/// };
/// let question = Question::try_new("Deploy the patch?").unwrap();
/// let verdict = Verdict::from_outcomes(
///     &question,
///     [
///         answer(AgentRole::Logic, "DECISION: YES"),
///         answer(AgentRole::Safety, "DECISION: YES"),
///         answer(AgentRole::Humanity, "DECISION: NO"),
///     ],
/// );
/// assert_eq!(verdict.result(), VerdictResult::Passed);
/// assert_eq!(verdict.tally().yes, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    question: String,
    outcomes: [AgentOutcome; 3],
    tally: Tally,
    result: VerdictResult,
}

impl Verdict {
    /// Reduce three outcomes to a verdict, restoring role order
    pub fn from_outcomes(question: &Question, mut outcomes: [AgentOutcome; 3]) -> Self {
        outcomes.sort_by_key(|outcome| outcome.agent().role());
        let tally = Tally::from_votes(outcomes.iter().map(AgentOutcome::vote));
        let result = VerdictResult::from_tally(&tally);

        Self {
            question: question.content().to_string(),
            outcomes,
            tally,
            result,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Per-agent outcomes in role order
    pub fn outcomes(&self) -> &[AgentOutcome; 3] {
        &self.outcomes
    }

    pub fn outcome_for(&self, role: AgentRole) -> &AgentOutcome {
        &self.outcomes[role.index()]
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn result(&self) -> VerdictResult {
        self.result
    }

    /// Number of agents whose call failed (as opposed to abstaining by text)
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }

    /// Visual vote summary in role order (e.g. "[●●○]")
    pub fn vote_summary(&self) -> String {
        let mut summary = String::from("[");
        for outcome in &self.outcomes {
            summary.push(outcome.vote().symbol());
        }
        summary.push(']');
        summary
    }
}
