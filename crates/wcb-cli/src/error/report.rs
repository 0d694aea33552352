//! Miette report conversion for CLI errors.

use crate::error::{BuildError, CliError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BuildError to miette Report
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::TaskFailed {
            task,
            file,
            error,
            hint,
        } => miette::miette!(
            "Build task '{}' failed\nFile: {}\n\n{}\n\nHint: {}",
            task,
            file.display(),
            error,
            hint
        ),
        BuildError::Branch { message, hint } => {
            miette::miette!("Could not determine the current branch\n\n{}\n\nHint: {}", message, hint)
        }
        _ => miette::miette!("{}", err),
    }
}
