//! Configuration for wcb with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wcb_pipeline::{DestinationSource, PipelineOptions};

pub use defaults::*;
pub use validation::*;

/// wcb configuration - loaded from wcb.config.json, `WCB_*` variables or CLI args.
///
/// Environment variables use the snake-case form of each key (`WCB_OUT_DIR`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WcbConfig {
    /// Template source directory
    #[serde(default = "default_src_dir")]
    pub src_dir: PathBuf,

    /// Output directory, relative to the project root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// URL prefix that the tag or branch name is appended to
    #[serde(default = "default_cdn_prefix")]
    pub cdn_prefix: String,

    /// Package manifest read for a bare `--tag`
    #[serde(default = "default_package_manifest")]
    pub package_manifest: PathBuf,

    /// Name of the manifest document written into the output directory
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Emit `.min` variants
    #[serde(default)]
    pub minify: bool,

    /// Delete the output directory before building
    #[serde(default)]
    pub clean: bool,
}

impl Default for WcbConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl WcbConfig {
    /// Pipeline options for a project rooted at `root`.
    pub fn pipeline_options(&self, root: &Path, destination: DestinationSource) -> PipelineOptions {
        PipelineOptions::new(root)
            .src_dir(&self.src_dir)
            .out_dir(&self.out_dir)
            .cdn_prefix(&self.cdn_prefix)
            .package_manifest(&self.package_manifest)
            .manifest_file(&self.manifest_file)
            .minify(self.minify)
            .clean(self.clean)
            .destination(destination)
    }
}
