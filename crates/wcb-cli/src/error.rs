//! Error handling for the wcb CLI.
//!
//! `CliError` is the top-level type returned by commands. Configuration and
//! build failures carry a hint telling the user what to change. Pipeline
//! errors are converted into the matching [`ConfigError`] or [`BuildError`]
//! variant.
//!
//! # Example
//!
//! ```rust,no_run
//! use wcb_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_package(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;
use wcb_pipeline::{ResolutionError, TaskFailure};

pub use report::{build_error_to_miette, cli_error_to_miette};

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration errors (bad file, bad value, failed validation)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failures while running the pipeline
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}\n\nHint: Create the file or drop --config to use wcb.config.json", .0.display())]
    NotFound(PathBuf),

    /// The merged configuration could not be deserialized
    #[error("Invalid configuration: {message}\n\nHint: Check wcb.config.json and WCB_* variables; known keys are srcDir, outDir, cdnPrefix, packageManifest, manifestFile, minify, clean")]
    Invalid {
        /// Figment's description of the problem
        message: String,
    },

    /// A configuration value failed validation
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Build pipeline errors, with hints.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The branch could not be read from git
    #[error("Could not determine the current branch: {message}\n\nHint: {hint}")]
    Branch {
        /// Underlying failure
        message: String,
        /// What to try instead
        hint: String,
    },

    /// The package version could not be read for a bare --tag
    #[error("Could not read the package version: {message}\n\nHint: Add a \"version\" field to package.json or pass --tag <TAG>")]
    PackageVersion {
        /// Underlying failure
        message: String,
    },

    /// Deleting the output directory failed
    #[error("Failed to clean {}: {message}\n\nHint: Check permissions on the output directory or build without --clean", .path.display())]
    CleanFailed {
        /// Output directory
        path: PathBuf,
        /// Underlying failure
        message: String,
    },

    /// Output directory could not be created
    #[error("Output directory is not writable: {}\n\nHint: Check directory permissions or specify a different --out-dir", .0.display())]
    OutputNotWritable(PathBuf),

    /// A build task or the asset copier failed
    #[error("Task '{task}' failed on {}: {error}\n\nHint: {hint}", .file.display())]
    TaskFailed {
        /// Task name (`html`, `css-min`, `copy`, ...)
        task: String,
        /// File the task was working on
        file: PathBuf,
        /// The underlying error
        error: String,
        /// Helpful hint for fixing
        hint: String,
    },

    /// Walking the output directory or writing CDN-FILES.md failed
    #[error("Failed to write the CDN manifest at {}: {message}\n\nHint: Check that nothing else is modifying the output directory during the build", .path.display())]
    ManifestFailed {
        /// Path being read or written
        path: PathBuf,
        /// Underlying failure
        message: String,
    },
}

impl From<wcb_pipeline::Error> for CliError {
    fn from(err: wcb_pipeline::Error) -> Self {
        use wcb_pipeline::Error;

        match err {
            Error::InvalidConfig(message) => ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: message,
                hint: "Fix the value in wcb.config.json, WCB_* variables or the command line"
                    .to_string(),
            }
            .into(),
            Error::Resolution(e) => resolution_error(e).into(),
            Error::Cleanup { path, source } => BuildError::CleanFailed {
                path,
                message: source.to_string(),
            }
            .into(),
            Error::OutputNotWritable { path, .. } => BuildError::OutputNotWritable(path).into(),
            Error::BuildTask { task, path, source } => {
                let hint = match &source {
                    TaskFailure::Minify(_) => {
                        "Fix the syntax error in the source file, or build without --minify"
                    }
                    TaskFailure::Read(_) => "Check that the file exists and is valid UTF-8 text",
                    TaskFailure::Write(_) => "Check permissions on the output directory",
                    TaskFailure::Worker(_) => "Re-run with --verbose for details",
                };
                BuildError::TaskFailed {
                    task,
                    file: path,
                    error: source.to_string(),
                    hint: hint.to_string(),
                }
                .into()
            }
            Error::Manifest { path, source } => BuildError::ManifestFailed {
                path,
                message: source.to_string(),
            }
            .into(),
        }
    }
}

fn resolution_error(err: ResolutionError) -> BuildError {
    match err {
        ResolutionError::VcsSpawn { .. } => BuildError::Branch {
            message: err.to_string(),
            hint: "Install git, or pass --tag <TAG> instead of --branch".to_string(),
        },
        ResolutionError::VcsFailed { .. } | ResolutionError::EmptyBranch { .. } => {
            BuildError::Branch {
                message: err.to_string(),
                hint: "Run inside a git checkout with a named branch, or pass --tag <TAG>"
                    .to_string(),
            }
        }
        ResolutionError::ManifestRead { .. }
        | ResolutionError::ManifestParse { .. }
        | ResolutionError::MissingVersion { .. } => BuildError::PackageVersion {
            message: err.to_string(),
        },
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
