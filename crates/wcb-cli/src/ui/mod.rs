//! Terminal UI: status lines and the build summary.
//!
//! Everything is written to stderr so stdout stays free for piping.
//! Color follows `NO_COLOR`, `FORCE_COLOR` and whether stderr is a terminal.
//!
//! ```no_run
//! use wcb_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Building src -> dist (local)");
//! ui::success("Build completed in 120ms");
//! ```

mod format;
mod messages;

pub use format::{format_duration, print_build_summary};
pub use messages::{info, success, warning};

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Check if color output should be enabled.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    !is_ci() && console::user_attended_stderr()
}

/// Decide once whether status lines are colored. `--no-color` always wins.
///
/// Call early in `main`.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS_ENABLED.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

/// Apply `style` only when colors are enabled.
pub(crate) fn styled(text: &str, style: fn(&str) -> String) -> String {
    if colors_enabled() {
        style(text)
    } else {
        text.to_string()
    }
}
