//! # wcb-pipeline
//!
//! Build pipeline for a single CDN-hosted web component.
//!
//! The pipeline takes HTML/CSS/JS templates from a source directory, resolves
//! the public base URL they will be served from, rewrites the `{{DEST}}` and
//! `{{INFIX}}` placeholders, optionally emits minified `.min` variants with
//! source maps, copies every other asset verbatim and finally writes a
//! `CDN-FILES.md` manifest listing the public URL of every produced file.
//!
//! ## Stages
//!
//! ```text
//! RESOLVE ──▶ BUILD (html, css, js, [html-min, css-min, js-min], copy) ──▶ MANIFEST
//! ```
//!
//! `RESOLVE` optionally cleans the output directory and computes the
//! [`Destination`] exactly once. `BUILD` runs every scheduled leaf
//! concurrently and waits for all of them. `MANIFEST` only runs when every
//! leaf succeeded.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wcb_pipeline::{DestinationSource, PipelineOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> wcb_pipeline::Result<()> {
//! let report = PipelineOptions::new(".")
//!     .minify(true)
//!     .clean(true)
//!     .destination(DestinationSource::Tag(Some("v2.0.0".to_string())))
//!     .run()
//!     .await?;
//!
//! println!("{} files served from {}", report.manifest_entries, report.destination);
//! # Ok(()) }
//! ```

pub mod asset;
pub mod copier;
pub mod destination;
mod error;
pub mod manifest;
pub mod minify;
mod options;
pub mod package;
pub mod pipeline;
pub mod placeholder;
pub mod scan;
pub mod task;
pub mod vcs;

pub use asset::{AssetKind, BuildMode};
pub use destination::{Destination, DestinationSource};
pub use error::{Error, ResolutionError, Result, TaskFailure};
pub use manifest::Manifest;
pub use minify::{AssetMinifier, MinifyError, Minified, NativeMinifier};
pub use options::PipelineOptions;
pub use pipeline::{BuildReport, LeafReport, Pipeline, Stage};
pub use task::BuildTask;
pub use vcs::{GitCli, VersionControl};

/// Default public URL prefix for CDN-tag and CDN-branch builds.
///
/// The tag, version or branch name is appended directly, followed by
/// `/<out-dir>`.
pub const DEFAULT_CDN_PREFIX: &str =
    "https://cdn.jsdelivr.net/gh/JamesRobertHugginsNgo/web-component-boilerplate@";

/// Default source directory, relative to the project root.
pub const DEFAULT_SRC_DIR: &str = "src";

/// Default output directory, relative to the project root.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Default package manifest the version is read from for bare `--tag` builds.
pub const DEFAULT_PACKAGE_MANIFEST: &str = "package.json";

/// File name of the generated manifest document, written into the output directory.
pub const MANIFEST_FILE_NAME: &str = "CDN-FILES.md";
