//! wcb CLI - build a CDN-hosted web component.
//!
//! This crate is the command-line front end for [`wcb_pipeline`]. It turns
//! flags, environment variables and an optional `wcb.config.json` into
//! pipeline options, runs the pipeline and reports the outcome.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - layered configuration (defaults, file, `WCB_*` env, flags)
//! - [`commands`] - the build command
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines and the build summary
//!
//! # Example
//!
//! ```rust,no_run
//! use wcb_cli::cli::BuildArgs;
//! use wcb_cli::commands::build;
//!
//! # async fn run() -> wcb_cli::Result<()> {
//! let args = BuildArgs {
//!     minify: true,
//!     tag: Some(Some("v2.0.0".to_string())),
//!     ..BuildArgs::default()
//! };
//! build::execute(args).await?;
//! # Ok(()) }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
