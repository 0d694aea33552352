//! Status message functions for terminal output.

use super::styled;
use owo_colors::OwoColorize;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", styled("✓", |t| t.green().bold().to_string()), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", styled("ℹ", |t| t.blue().bold().to_string()), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        styled("⚠", |t| t.yellow().bold().to_string()),
        styled(message, |t| t.yellow().to_string())
    );
}
