//! Progress reporting for a decision

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use magi_application::ProgressNotifier;
use magi_domain::{Agent, AgentOutcome, Verdict, VerdictResult};

/// Reports progress with a bar that fills as agents settle
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(Self::style());
        bar.set_prefix("MAGI");
        Self { bar }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:20.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn settled_message(outcome: &AgentOutcome) -> String {
        let codename = outcome.agent().codename();
        match outcome.error() {
            None => format!("{} {} {}", "v".green(), codename, outcome.vote()),
            Some(kind) => format!("{} {} {}", "x".red(), codename, kind),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_dispatch(&self, agents: &[Agent]) {
        self.bar.set_length(agents.len() as u64);
        self.bar.set_position(0);
        self.bar.set_message("Deliberating...");
    }

    fn on_agent_settled(&self, outcome: &AgentOutcome) {
        self.bar.set_message(Self::settled_message(outcome));
        self.bar.inc(1);
    }

    fn on_verdict(&self, verdict: &Verdict) {
        let label = match verdict.result() {
            VerdictResult::Passed => verdict.result().as_str().green(),
            VerdictResult::Rejected => verdict.result().as_str().red(),
            VerdictResult::Inconclusive => verdict.result().as_str().yellow(),
        };
        self.bar
            .finish_with_message(format!("{} {}", verdict.vote_summary(), label));
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_dispatch(&self, agents: &[Agent]) {
        eprintln!(
            "{} {} ({} agents)",
            "->".cyan(),
            "Consulting MAGI".bold(),
            agents.len()
        );
    }

    fn on_agent_settled(&self, outcome: &AgentOutcome) {
        eprintln!("  {}", ProgressReporter::settled_message(outcome));
    }

    fn on_verdict(&self, _verdict: &Verdict) {
        eprintln!();
    }
}
