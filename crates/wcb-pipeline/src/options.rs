use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::destination::{self, DestinationSource};
use crate::minify::{AssetMinifier, NativeMinifier};
use crate::pipeline::{BuildReport, Pipeline};
use crate::vcs::{GitCli, VersionControl};
use crate::{Error, Result};

/// Configuration for one pipeline run.
///
/// Use the builder methods for ergonomic configuration, or construct
/// directly for full control. Relative `src_dir`, `out_dir` and
/// `package_manifest` paths are resolved against `root`.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Project root (default: `.`).
    pub root: PathBuf,

    /// Template source directory (default: `src`).
    pub src_dir: PathBuf,

    /// Output directory, relative to the root (default: `dist`).
    ///
    /// Its normalized form is also the last segment of every destination.
    pub out_dir: PathBuf,

    /// Emit `.min` variants with source maps (default: false).
    pub minify: bool,

    /// Delete the output directory before building (default: false).
    pub clean: bool,

    /// Where the build will be served from (default: local).
    pub destination: DestinationSource,

    /// URL prefix for tag and branch builds.
    pub cdn_prefix: String,

    /// Package manifest read for bare tag builds (default: `package.json`).
    pub package_manifest: PathBuf,

    /// Manifest file name inside the output directory (default: `CDN-FILES.md`).
    pub manifest_file: String,

    /// Branch lookup for branch builds (default: the `git` CLI).
    pub version_control: Arc<dyn VersionControl>,

    /// Minifier used by the `.min` tasks.
    pub minifier: Arc<dyn AssetMinifier>,
}

impl PipelineOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            src_dir: PathBuf::from(crate::DEFAULT_SRC_DIR),
            out_dir: PathBuf::from(crate::DEFAULT_OUT_DIR),
            minify: false,
            clean: false,
            destination: DestinationSource::Local,
            cdn_prefix: crate::DEFAULT_CDN_PREFIX.to_string(),
            package_manifest: PathBuf::from(crate::DEFAULT_PACKAGE_MANIFEST),
            manifest_file: crate::MANIFEST_FILE_NAME.to_string(),
            version_control: Arc::new(GitCli::new()),
            minifier: Arc::new(NativeMinifier),
        }
    }

    pub fn src_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.src_dir = dir.into();
        self
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn minify(mut self, enabled: bool) -> Self {
        self.minify = enabled;
        self
    }

    pub fn clean(mut self, enabled: bool) -> Self {
        self.clean = enabled;
        self
    }

    pub fn destination(mut self, source: DestinationSource) -> Self {
        self.destination = source;
        self
    }

    pub fn cdn_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cdn_prefix = prefix.into();
        self
    }

    pub fn package_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.package_manifest = path.into();
        self
    }

    pub fn manifest_file(mut self, name: impl Into<String>) -> Self {
        self.manifest_file = name.into();
        self
    }

    /// Replace the branch lookup, e.g. with a fixed answer in tests.
    pub fn version_control(mut self, vcs: Arc<dyn VersionControl>) -> Self {
        self.version_control = vcs;
        self
    }

    pub fn minifier(mut self, minifier: Arc<dyn AssetMinifier>) -> Self {
        self.minifier = minifier;
        self
    }

    /// Absolute or root-relative source directory.
    pub fn src_path(&self) -> PathBuf {
        self.root.join(&self.src_dir)
    }

    /// Output directory joined onto the root.
    pub fn out_path(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }

    pub fn package_manifest_path(&self) -> PathBuf {
        self.root.join(&self.package_manifest)
    }

    /// URL segment for the output directory, after validation.
    pub fn out_segment(&self) -> Result<String> {
        destination::out_dir_segment(&self.out_dir).ok_or_else(|| {
            Error::InvalidConfig(format!(
                "output directory '{}' must be a subdirectory of the project root",
                self.out_dir.display()
            ))
        })
    }

    /// Validate the options.
    ///
    /// Returns an error if:
    /// - the output directory is empty, absolute, the root itself or escapes it
    /// - the source directory is missing or is not a directory
    /// - the source and output directories are the same or nested
    /// - the CDN prefix is empty for a tag or branch build
    /// - an explicit tag contains whitespace
    /// - the manifest file name is not a plain file name
    pub fn validate(&self) -> Result<()> {
        let out_segment = self.out_segment()?;

        let src = self.src_path();
        if !src.is_dir() {
            return Err(Error::InvalidConfig(format!(
                "source directory '{}' does not exist",
                src.display()
            )));
        }

        let out = clean_join(&self.root, Path::new(&out_segment));
        let src_clean = clean_join(&self.root, &self.src_dir);
        if src_clean.starts_with(&out) || out.starts_with(&src_clean) {
            return Err(Error::InvalidConfig(format!(
                "source directory '{}' and output directory '{}' must not overlap",
                self.src_dir.display(),
                self.out_dir.display()
            )));
        }

        if self.destination.is_cdn() && self.cdn_prefix.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "CDN prefix cannot be empty for tag or branch builds".into(),
            ));
        }

        if let DestinationSource::Tag(Some(tag)) = &self.destination {
            if tag.chars().any(char::is_whitespace) {
                return Err(Error::InvalidConfig(format!(
                    "tag '{tag}' must not contain whitespace"
                )));
            }
        }

        let manifest_name = Path::new(&self.manifest_file);
        if self.manifest_file.is_empty()
            || manifest_name.file_name().map(|n| n.len()) != Some(self.manifest_file.len())
        {
            return Err(Error::InvalidConfig(format!(
                "manifest file '{}' must be a plain file name",
                self.manifest_file
            )));
        }

        Ok(())
    }

    /// Run the pipeline with these options.
    pub async fn run(self) -> Result<BuildReport> {
        Pipeline::new(self).run().await
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::new(".")
    }
}

fn clean_join(root: &Path, dir: &Path) -> PathBuf {
    use path_clean::PathClean;
    root.join(dir).clean()
}
