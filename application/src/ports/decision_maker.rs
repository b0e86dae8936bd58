//! Decision maker port
//!
//! The narrow view of the arbiter offered to callers that only act on the
//! outcome (for example a larger control loop choosing between strategies).
//! Per-agent records stay behind this boundary.

use crate::use_cases::decide::DecideError;
use async_trait::async_trait;
use magi_domain::VerdictResult;

#[async_trait]
pub trait DecisionMaker: Send + Sync {
    /// Decide a question, returning only the final result
    async fn decide_result(&self, question: &str) -> Result<VerdictResult, DecideError>;
}
