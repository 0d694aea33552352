//! Shared utilities for command implementations.

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Resolve the project root.
///
/// Uses `--cwd` when given (relative to the current directory), otherwise the
/// current directory itself.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if an explicit root does not exist or
/// is not a directory.
pub fn resolve_project_root(explicit_cwd: Option<&Path>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;

    let Some(cwd_path) = explicit_cwd else {
        return Ok(current_dir);
    };

    let absolute = resolve_path(cwd_path, &current_dir);
    if !absolute.exists() {
        return Err(CliError::InvalidArgument(format!(
            "Specified --cwd directory does not exist: {}",
            absolute.display()
        )));
    }
    if !absolute.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Specified --cwd is not a directory: {}",
            absolute.display()
        )));
    }

    tracing::debug!("Using project root {} (from --cwd)", absolute.display());
    Ok(absolute)
}
