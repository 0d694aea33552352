//! Stage orchestration.
//!
//! A run has three stages that execute strictly in order:
//!
//! 1. **Resolve**: optionally delete the output directory, then compute the
//!    destination once.
//! 2. **Build**: the template tasks and the passthrough copier run
//!    concurrently. The stage completes when all leaves complete and fails as
//!    soon as any one fails.
//! 3. **Manifest**: walk the output directory and write the manifest.
//!
//! A failure in one stage prevents every later stage from starting. Leaves
//! already running when a sibling fails are dropped; files they wrote stay on
//! disk.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};

use crate::copier;
use crate::destination::{Destination, Resolver};
use crate::error::{Error, Result};
use crate::manifest;
use crate::options::PipelineOptions;
use crate::task::{BuildContext, BuildTask};

/// Pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Resolve,
    Build,
    Manifest,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Resolve => "resolve",
            Stage::Build => "build",
            Stage::Manifest => "manifest",
        })
    }
}

/// Outcome of one build leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafReport {
    /// `html`, `css-min`, `copy`, ...
    pub name: String,
    /// Files written, source maps included.
    pub files_written: usize,
}

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub destination: Destination,
    pub leaves: Vec<LeafReport>,
    pub manifest_path: PathBuf,
    pub manifest_entries: usize,
}

impl BuildReport {
    pub fn files_written(&self) -> usize {
        self.leaves.iter().map(|leaf| leaf.files_written).sum()
    }
}

/// Runs the three stages for one set of options.
#[derive(Debug)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub async fn run(&self) -> Result<BuildReport> {
        self.options.validate()?;
        let started = Instant::now();

        let destination = self.resolve().await?;
        let out_dir = self.options.out_path();
        let ctx = BuildContext {
            src_dir: self.options.src_path(),
            out_dir: out_dir.clone(),
            destination,
            minifier: self.options.minifier.clone(),
        };

        let leaves = self.build(&ctx).await?;

        tracing::info!(stage = %Stage::Manifest, "Writing manifest");
        let (manifest, manifest_path) =
            manifest::write_manifest(&out_dir, &ctx.destination, &self.options.manifest_file)
                .await?;

        tracing::info!(
            destination = %ctx.destination,
            files = manifest.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Pipeline finished"
        );

        Ok(BuildReport {
            destination: ctx.destination,
            leaves,
            manifest_path,
            manifest_entries: manifest.len(),
        })
    }

    async fn resolve(&self) -> Result<Destination> {
        let out_dir = self.options.out_path();

        if self.options.clean {
            tracing::info!(stage = %Stage::Resolve, dir = %out_dir.display(), "Cleaning output directory");
            clean_output_dir(&out_dir).await?;
        }

        let out_segment = self.options.out_segment()?;
        let package_manifest = self.options.package_manifest_path();
        let resolver = Resolver {
            cdn_prefix: &self.options.cdn_prefix,
            out_segment: &out_segment,
            project_root: &self.options.root,
            package_manifest: &package_manifest,
            version_control: self.options.version_control.as_ref(),
        };
        let destination = resolver.resolve(&self.options.destination).await?;

        tracing::info!(
            stage = %Stage::Resolve,
            source = %self.options.destination,
            destination = %destination,
            "Resolved destination"
        );

        tokio::fs::create_dir_all(&out_dir)
            .await
            .map_err(|source| Error::OutputNotWritable {
                path: out_dir.clone(),
                source,
            })?;

        Ok(destination)
    }

    async fn build(&self, ctx: &BuildContext) -> Result<Vec<LeafReport>> {
        let tasks = BuildTask::scheduled(self.options.minify);
        tracing::info!(
            stage = %Stage::Build,
            leaves = tasks.len() + 1,
            "Building templates and copying assets"
        );

        let mut leaves: Vec<BoxFuture<'_, Result<LeafReport>>> =
            tasks.into_iter().map(|task| task.run(ctx).boxed()).collect();
        leaves.push(copier::copy_passthrough(ctx).boxed());

        let reports = try_join_all(leaves).await?;
        for report in &reports {
            tracing::debug!(leaf = %report.name, files = report.files_written, "Leaf finished");
        }
        Ok(reports)
    }
}

/// Delete the output directory. A missing directory is not an error.
pub async fn clean_output_dir(out_dir: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(out_dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::Cleanup {
            path: out_dir.to_path_buf(),
            source,
        }),
    }
}
