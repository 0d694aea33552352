//! Template build tasks.
//!
//! Each task handles one asset kind in one mode: it selects the matching
//! sources, rewrites both placeholders and writes the result under the same
//! relative path in the output directory. Minified tasks also run the
//! minifier, add `.min` to the file name and write a `.map` next to CSS and
//! JS outputs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::asset::{AssetKind, BuildMode};
use crate::destination::Destination;
use crate::error::{Error, Result, TaskFailure};
use crate::minify::{AssetMinifier, Minified};
use crate::pipeline::LeafReport;
use crate::placeholder;
use crate::scan::{self, SourceFilter};

/// Shared inputs for every leaf of the build stage.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
    pub destination: Destination,
    pub minifier: Arc<dyn AssetMinifier>,
}

/// One (kind, mode) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildTask {
    pub kind: AssetKind,
    pub mode: BuildMode,
}

impl BuildTask {
    pub const fn new(kind: AssetKind, mode: BuildMode) -> Self {
        Self { kind, mode }
    }

    /// Task name used in logs and errors: `html`, `css-min`, ...
    pub fn name(&self) -> String {
        match self.mode {
            BuildMode::Plain => self.kind.to_string(),
            BuildMode::Minified => format!("{}-min", self.kind),
        }
    }

    /// The template tasks a run schedules: plain variants always, minified
    /// variants only when `minify` is set.
    pub fn scheduled(minify: bool) -> Vec<BuildTask> {
        let mut tasks = Vec::with_capacity(6);
        for kind in AssetKind::ALL {
            tasks.push(BuildTask::new(kind, BuildMode::Plain));
            if minify {
                tasks.push(BuildTask::new(kind, BuildMode::Minified));
            }
        }
        tasks
    }

    fn fail(&self, path: &Path, source: TaskFailure) -> Error {
        Error::BuildTask {
            task: self.name(),
            path: path.to_path_buf(),
            source,
        }
    }

    /// Build every matching source. Stops at the first failing file.
    pub async fn run(self, ctx: &BuildContext) -> Result<LeafReport> {
        let sources = scan::collect_sources(&ctx.src_dir, SourceFilter::Kind(self.kind))
            .await
            .map_err(|e| self.fail(&ctx.src_dir, TaskFailure::Read(e)))?;

        tracing::debug!(task = %self.name(), files = sources.len(), "Running build task");

        let mut files_written = 0;
        for relative in &sources {
            files_written += self.build_file(ctx, relative).await?;
        }

        Ok(LeafReport {
            name: self.name(),
            files_written,
        })
    }

    async fn build_file(&self, ctx: &BuildContext, relative: &Path) -> Result<usize> {
        let src_path = ctx.src_dir.join(relative);
        let text = tokio::fs::read_to_string(&src_path)
            .await
            .map_err(|e| self.fail(&src_path, TaskFailure::Read(e)))?;

        let rewritten = placeholder::rewrite(&text, ctx.destination.as_str(), self.mode.infix());
        let out_relative = self.mode.output_path(relative);
        let out_path = ctx.out_dir.join(&out_relative);

        let Minified { mut code, source_map } = match self.mode {
            BuildMode::Plain => Minified {
                code: rewritten,
                source_map: None,
            },
            BuildMode::Minified => self
                .minify(ctx, relative, rewritten)
                .await
                .map_err(|e| self.fail(&src_path, e))?,
        };

        let mut written = 1;
        if let Some(map) = source_map {
            let map_path = map_path_for(&out_path);
            let map_name = map_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if let Some(comment) = self.kind.source_map_comment(&map_name) {
                code.push_str(&comment);
            }
            write_output(&map_path, map.as_bytes())
                .await
                .map_err(|e| self.fail(&map_path, TaskFailure::Write(e)))?;
            written += 1;
        }

        write_output(&out_path, code.as_bytes())
            .await
            .map_err(|e| self.fail(&out_path, TaskFailure::Write(e)))?;

        tracing::trace!(
            task = %self.name(),
            from = %relative.display(),
            to = %out_relative.display(),
            "Wrote output"
        );
        Ok(written)
    }

    async fn minify(
        &self,
        ctx: &BuildContext,
        relative: &Path,
        source: String,
    ) -> std::result::Result<Minified, TaskFailure> {
        let minifier = Arc::clone(&ctx.minifier);
        let kind = self.kind;
        let source_name = map_source_name(relative);

        tokio::task::spawn_blocking(move || minifier.minify(kind, &source_name, &source))
            .await
            .map_err(|e| TaskFailure::Worker(e.to_string()))?
            .map_err(TaskFailure::from)
    }
}

/// `x.min.js` → `x.min.js.map`
fn map_path_for(out_path: &Path) -> PathBuf {
    let mut name = out_path.as_os_str().to_os_string();
    name.push(".map");
    PathBuf::from(name)
}

/// Source name recorded in a source map.
///
/// The map sits next to the output, in the directory that mirrors the
/// source's own, so the bare file name is the map-relative path.
fn map_source_name(relative: &Path) -> String {
    relative
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Write a file, creating its parent directories first.
pub(crate) async fn write_output(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await
}
