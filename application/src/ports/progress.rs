//! Progress notification port
//!
//! Defines the interface for reporting progress while a decision is made.

use magi_domain::{Agent, AgentOutcome, Verdict};

/// Callback for progress updates during a decision
///
/// Implementations live in the presentation layer. `on_agent_settled`
/// fires in completion order, which is not the verdict's role order.
pub trait ProgressNotifier: Send + Sync {
    /// Called once all agent calls have been dispatched
    fn on_dispatch(&self, agents: &[Agent]);

    /// Called when one agent call settles (answer, failure, or timeout)
    fn on_agent_settled(&self, outcome: &AgentOutcome);

    /// Called after the votes are reduced
    fn on_verdict(&self, _verdict: &Verdict) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_dispatch(&self, _agents: &[Agent]) {}
    fn on_agent_settled(&self, _outcome: &AgentOutcome) {}
}
