//! Console output formatter for verdicts

use colored::{ColoredString, Colorize};
use magi_domain::{AgentOutcome, OutputFormat, Verdict, VerdictResult, Vote};

/// Formats verdicts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a verdict in the requested format
    pub fn format(verdict: &Verdict, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_full(verdict),
            OutputFormat::Votes => Self::format_votes(verdict),
            OutputFormat::Json => Self::format_json(verdict),
        }
    }

    /// Every agent's response, the tally, and the result
    pub fn format_full(verdict: &Verdict) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("MAGI Verdict"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            verdict.question()
        ));

        for outcome in verdict.outcomes() {
            output.push_str(&Self::outcome_section(outcome));
        }

        output.push_str(&format!("\n{}\n", "-".repeat(40)));
        output.push_str(&format!(
            "{} {}  {}\n",
            "Tally:".cyan().bold(),
            verdict.tally(),
            verdict.vote_summary()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Result:".cyan().bold(),
            Self::result_label(verdict.result())
        ));

        output.push_str(&Self::footer());

        output
    }

    /// One line per vote plus the result
    pub fn format_votes(verdict: &Verdict) -> String {
        let mut output = String::new();

        for outcome in verdict.outcomes() {
            let agent = outcome.agent();
            let mut line = format!(
                "{:<10} {:<9} {}",
                agent.codename().bold(),
                agent.role().as_str(),
                Self::vote_label(outcome.vote())
            );
            if let Some(kind) = outcome.error() {
                line.push_str(&format!(" ({})", kind).dimmed().to_string());
            }
            output.push_str(&line);
            output.push('\n');
        }

        output.push_str(&format!(
            "{} {} ({})\n",
            "=>".cyan(),
            Self::result_label(verdict.result()),
            verdict.tally()
        ));

        output
    }

    /// Format as JSON
    pub fn format_json(verdict: &Verdict) -> String {
        serde_json::to_string_pretty(verdict).unwrap_or_else(|_| "{}".to_string())
    }

    fn outcome_section(outcome: &AgentOutcome) -> String {
        let agent = outcome.agent();
        let title = format!(
            "── {} · {} ({}) ──",
            agent.codename(),
            agent.role(),
            agent.model_identifier()
        );
        let title = if outcome.is_success() {
            title.yellow().bold()
        } else {
            title.red().bold()
        };

        let mut section = format!(
            "\n{}\n{} {}  {}\n",
            title,
            "Vote:".bold(),
            Self::vote_label(outcome.vote()),
            format!("{} ms", outcome.elapsed().as_millis()).dimmed()
        );

        match (outcome.raw_text(), outcome.error()) {
            (Some(text), _) => {
                section.push_str(&Self::indent(text.trim(), "  "));
                section.push('\n');
                if outcome.is_parse_failure() {
                    section.push_str(&format!("  {}\n", "(no DECISION marker found)".dimmed()));
                }
            }
            (None, Some(kind)) => {
                section.push_str(&format!(
                    "  {} {}\n",
                    format!("Error ({}):", kind).red(),
                    outcome.detail().unwrap_or("Unknown")
                ));
            }
            (None, None) => {}
        }

        section
    }

    fn vote_label(vote: Vote) -> ColoredString {
        match vote {
            Vote::Yes => vote.as_str().green().bold(),
            Vote::No => vote.as_str().red().bold(),
            Vote::Abstain => vote.as_str().dimmed(),
        }
    }

    fn result_label(result: VerdictResult) -> ColoredString {
        match result {
            VerdictResult::Passed => result.as_str().green().bold(),
            VerdictResult::Rejected => result.as_str().red().bold(),
            VerdictResult::Inconclusive => result.as_str().yellow().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
