//! Quorum decision domain
//!
//! Three agents each cast a [`Vote`]; the votes are counted into a
//! [`Tally`] and classified into a [`VerdictResult`].
//!
//! ```text
//! agent text ──parse_decision──▶ Vote ─┐
//! agent text ──parse_decision──▶ Vote ─┼─▶ Tally ──majority of 3──▶ VerdictResult
//! call error ──────────────────▶ ABSTAIN ┘
//! ```
//!
//! | Tally | Result |
//! |-------|--------|
//! | yes ≥ 2 | PASSED |
//! | no ≥ 2 | REJECTED |
//! | anything else | INCONCLUSIVE |

pub mod outcome;
pub mod parsing;
pub mod rule;
pub mod verdict;
pub mod vote;

// Re-export main types
pub use outcome::{AgentOutcome, ErrorKind};
pub use parsing::{DECISION_MARKER, parse_decision};
pub use rule::{QUORUM, Tally, VerdictResult};
pub use verdict::Verdict;
pub use vote::Vote;
