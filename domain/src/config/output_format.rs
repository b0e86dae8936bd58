//! Output format value object

use serde::{Deserialize, Serialize};

/// How a verdict is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every agent's response, tally, and result (default)
    #[default]
    Full,
    /// One line per vote plus the result
    Votes,
    /// JSON output
    Json,
}
