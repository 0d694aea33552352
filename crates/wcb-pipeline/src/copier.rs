//! Passthrough copy of non-template assets.
//!
//! Images, fonts, JSON and anything else that is not HTML, CSS or JS is
//! copied byte for byte to the same relative path in the output directory.
//! No placeholder rewriting and no `.min` variants.

use crate::error::{Error, Result, TaskFailure};
use crate::pipeline::LeafReport;
use crate::scan::{self, SourceFilter};
use crate::task::BuildContext;

/// Leaf name used in logs and errors.
pub const COPY_TASK: &str = "copy";

fn fail(path: &std::path::Path, source: TaskFailure) -> Error {
    Error::BuildTask {
        task: COPY_TASK.to_string(),
        path: path.to_path_buf(),
        source,
    }
}

/// Copy every passthrough file from the source to the output directory.
pub async fn copy_passthrough(ctx: &BuildContext) -> Result<LeafReport> {
    let sources = scan::collect_sources(&ctx.src_dir, SourceFilter::Passthrough)
        .await
        .map_err(|e| fail(&ctx.src_dir, TaskFailure::Read(e)))?;

    tracing::debug!(task = COPY_TASK, files = sources.len(), "Copying assets");

    for relative in &sources {
        let from = ctx.src_dir.join(relative);
        let to = ctx.out_dir.join(relative);
        if let Some(parent) = to.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| fail(parent, TaskFailure::Write(e)))?;
        }
        tokio::fs::copy(&from, &to)
            .await
            .map_err(|e| fail(&from, TaskFailure::Read(e)))?;
    }

    Ok(LeafReport {
        name: COPY_TASK.to_string(),
        files_written: sources.len(),
    })
}
