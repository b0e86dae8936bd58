//! Presentation layer for magi-arbiter
//!
//! This crate contains the CLI definition, verdict formatters,
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::set_color_enabled;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
