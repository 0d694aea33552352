//! Version-control seam.
//!
//! Branch builds need the name of the currently checked-out branch. The
//! lookup sits behind [`VersionControl`] so tests can supply a fixed answer
//! without a repository on disk.

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;

use crate::error::ResolutionError;

/// Source of the current branch name.
#[async_trait]
pub trait VersionControl: Send + Sync + std::fmt::Debug {
    /// Name of the branch checked out in the repository at `root`.
    ///
    /// Implementations return the name with line terminators removed and
    /// fail rather than return an empty string.
    async fn current_branch(&self, root: &Path) -> Result<String, ResolutionError>;
}

/// [`VersionControl`] backed by the `git` command line.
///
/// Runs `git rev-parse --abbrev-ref HEAD` in the project root.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    /// Arguments passed to the program.
    pub const ARGS: [&'static str; 3] = ["rev-parse", "--abbrev-ref", "HEAD"];

    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a different executable, e.g. a wrapper script or an absolute path.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self) -> String {
        format!(
            "{} {}",
            self.program.to_string_lossy(),
            Self::ARGS.join(" ")
        )
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn current_branch(&self, root: &Path) -> Result<String, ResolutionError> {
        let command = self.command_line();
        tracing::debug!(command = %command, root = %root.display(), "Querying current branch");

        let output = tokio::process::Command::new(&self.program)
            .args(Self::ARGS)
            .current_dir(root)
            .output()
            .await
            .map_err(|source| ResolutionError::VcsSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ResolutionError::VcsFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let branch = strip_line_endings(&String::from_utf8_lossy(&output.stdout));
        if branch.is_empty() {
            return Err(ResolutionError::EmptyBranch { command });
        }
        Ok(branch)
    }
}

/// Remove every carriage return and line feed.
pub fn strip_line_endings(text: &str) -> String {
    text.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}
