//! Error types for the build pipeline.
//!
//! Every error is fatal for the run: nothing is retried and a failing stage
//! stops the pipeline before the manifest is written.

use std::path::PathBuf;

use thiserror::Error;

use crate::minify::MinifyError;

/// Error type for pipeline operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Options failed validation before the pipeline started.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The destination base URL could not be computed.
    #[error("Destination resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    /// Deleting the output directory failed.
    #[error("Failed to clean output directory {}: {source}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("Output directory is not writable: {}: {source}", .path.display())]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A build task or the passthrough copier failed on a file.
    #[error("Build task '{task}' failed on {}: {source}", .path.display())]
    BuildTask {
        task: String,
        path: PathBuf,
        #[source]
        source: TaskFailure,
    },

    /// Walking the output tree or writing the manifest failed.
    #[error("Manifest generation failed at {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while computing the destination base URL.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The version-control command could not be started.
    #[error("Failed to run `{command}`: {source}")]
    VcsSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The version-control command exited unsuccessfully.
    #[error("`{command}` exited with {status}: {stderr}")]
    VcsFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The version-control command succeeded but printed no branch name.
    #[error("`{command}` printed an empty branch name")]
    EmptyBranch { command: String },

    /// The package manifest could not be read.
    #[error("Failed to read package manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package manifest is not valid JSON of the expected shape.
    #[error("Invalid package manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The package manifest has no `version` field.
    #[error("Package manifest {} has no \"version\" field", .path.display())]
    MissingVersion { path: PathBuf },
}

/// What went wrong inside a single build task.
#[derive(Debug, Error)]
pub enum TaskFailure {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("{0}")]
    Minify(#[from] MinifyError),

    /// The blocking worker running the minifier panicked or was cancelled.
    #[error("minifier worker failed: {0}")]
    Worker(String),
}

/// Result type alias for pipeline operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
