//! Verdict output formatting

pub mod console;

/// Enable or disable ANSI colors for all formatted output
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}
