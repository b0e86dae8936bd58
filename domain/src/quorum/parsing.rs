//! Vote extraction from free-form agent responses.
//!
//! Agents are asked to finish with `DECISION: YES` or `DECISION: NO`.
//! Models follow that loosely: the marker may appear mid-text, in any case,
//! with extra spacing, more than once, or echoed back from the prompt as
//! `DECISION: [YES/NO]`. Parsing is pure and total; anything unusable is
//! an abstention.

use super::vote::Vote;

/// Label that introduces the decision token
pub const DECISION_MARKER: &str = "DECISION:";

/// Extract the vote from an agent response.
///
/// Finds the first `DECISION:` label (ASCII case-insensitive) that is
/// followed, after optional whitespace, by a run of ASCII letters. That run
/// is the token: `YES` and `NO` (any case) map to a vote, any other word
/// abstains. Labels with no letters after them, such as an echoed
/// `DECISION: [YES/NO]`, are skipped.
///
/// # Examples
///
/// ```
/// use magi_domain::quorum::{Vote, parse_decision};
///
/// assert_eq!(parse_decision("Risky, but worth it. DECISION: YES"), Vote::Yes);
/// assert_eq!(parse_decision("decision:   no."), Vote::No);
/// assert_eq!(parse_decision("DECISION: MAYBE"), Vote::Abstain);
/// assert_eq!(parse_decision("I cannot decide."), Vote::Abstain);
/// ```
pub fn parse_decision(text: &str) -> Vote {
    let mut from = 0;
    while let Some(pos) = find_marker(text.as_bytes(), from) {
        // The marker is ASCII, so both ends of a match are char boundaries.
        let after = pos + DECISION_MARKER.len();
        let rest = text[after..].trim_start();
        let token_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        if token_len > 0 {
            return Vote::from_token(&rest[..token_len]);
        }
        from = after;
    }
    Vote::Abstain
}

fn find_marker(haystack: &[u8], from: usize) -> Option<usize> {
    let marker = DECISION_MARKER.as_bytes();
    haystack
        .get(from..)?
        .windows(marker.len())
        .position(|window| window.eq_ignore_ascii_case(marker))
        .map(|offset| from + offset)
}
