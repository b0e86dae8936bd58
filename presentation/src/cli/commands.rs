//! CLI command definitions

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every agent's response, the tally, and the result
    Full,
    /// One line per vote plus the result
    Votes,
    /// JSON output
    Json,
}

impl From<OutputFormat> for magi_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => magi_domain::OutputFormat::Full,
            OutputFormat::Votes => magi_domain::OutputFormat::Votes,
            OutputFormat::Json => magi_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for magi-arbiter
#[derive(Parser, Debug)]
#[command(name = "magi-arbiter")]
#[command(author, version, about = "Three-agent quorum arbiter for yes/no decisions")]
#[command(long_about = r#"
MAGI Arbiter puts a yes/no question to three independent advisory agents
and decides by majority of three.

  MELCHIOR   (logic)     analytical reasoning
  BALTHASAR  (safety)    risk assessment
  CASPER     (humanity)  human impact

Each agent is a hosted text-generation model and must end its answer with
"DECISION: YES" or "DECISION: NO". Two matching votes pass or reject the
question; anything else (failures, timeouts, unreadable answers) abstains,
and a verdict without two matching votes is INCONCLUSIVE.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. MAGI_* environment  e.g. MAGI_ENDPOINT__BASE_URL
3. ./magi.toml         Project-level config
4. ~/.config/magi-arbiter/config.toml   Global config

The credential is read from HF_API_TOKEN unless configured otherwise.

Example:
  magi-arbiter "Should we deploy the hotfix tonight?"
  magi-arbiter -t 30 -o votes "Is the migration safe to run?"
  magi-arbiter --safety-model bigscience/bloomz-3b -o json "Ship it?"
"#)]
pub struct Cli {
    /// The yes/no question to decide (not required with --show-config)
    #[arg(required_unless_present = "show_config")]
    pub question: Option<String>,

    /// Per-agent timeout in seconds
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Model for MELCHIOR (logic)
    #[arg(long, value_name = "MODEL", value_parser = NonEmptyStringValueParser::new())]
    pub logic_model: Option<String>,

    /// Model for BALTHASAR (safety)
    #[arg(long, value_name = "MODEL", value_parser = NonEmptyStringValueParser::new())]
    pub safety_model: Option<String>,

    /// Model for CASPER (humanity)
    #[arg(long, value_name = "MODEL", value_parser = NonEmptyStringValueParser::new())]
    pub humanity_model: Option<String>,

    /// Output format [default: from config, else full]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Model overrides given on the command line, in role order
    pub fn model_overrides(&self) -> [(magi_domain::AgentRole, Option<&str>); 3] {
        use magi_domain::AgentRole;
        [
            (AgentRole::Logic, self.logic_model.as_deref()),
            (AgentRole::Safety, self.safety_model.as_deref()),
            (AgentRole::Humanity, self.humanity_model.as_deref()),
        ]
    }
}
