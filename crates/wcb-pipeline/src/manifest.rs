//! CDN file manifest.
//!
//! After the build, the output directory is walked depth-first and every
//! non-directory entry is listed under its public URL in a Markdown document:
//!
//! ```text
//! # CDN Files
//!
//! - /dist/index.html
//! - /dist/img/logo.png
//! ```
//!
//! Entries are taken with `lstat` semantics: a symbolic link is listed as a
//! file and never followed. A manifest left over from a previous run is
//! listed like any other file because the walk happens before the new one is
//! written.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_stream::try_stream;
use futures::{Stream, TryStreamExt};

use crate::destination::Destination;
use crate::error::{Error, Result};

const HEADING: &str = "# CDN Files";

fn walk_error(path: &Path, source: std::io::Error) -> Error {
    Error::Manifest {
        path: path.to_path_buf(),
        source,
    }
}

async fn read_names(dir: &Path) -> Result<std::vec::IntoIter<OsString>> {
    let mut reader = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| walk_error(dir, e))?;
    let mut names = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(|e| walk_error(dir, e))? {
        names.push(entry.file_name());
    }
    Ok(names.into_iter())
}

/// Lazily walk `root`, yielding the path of every non-directory entry
/// relative to `root`. Siblings come in directory-listing order and a
/// directory is fully walked before its next sibling.
pub fn walk_files(root: &Path) -> impl Stream<Item = Result<PathBuf>> {
    let root = root.to_path_buf();
    try_stream! {
        let top = read_names(&root).await?;
        let mut stack = vec![(PathBuf::new(), top)];
        loop {
            let next = match stack.last_mut() {
                Some((dir, names)) => names.next().map(|name| dir.join(name)),
                None => break,
            };
            let Some(relative) = next else {
                stack.pop();
                continue;
            };

            let full = root.join(&relative);
            let metadata = tokio::fs::symlink_metadata(&full)
                .await
                .map_err(|e| walk_error(&full, e))?;
            if metadata.is_dir() {
                let names = read_names(&full).await?;
                stack.push((relative, names));
            } else {
                yield relative;
            }
        }
    }
}

/// Manifest entries, in walk order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    pub entries: Vec<String>,
}

impl Manifest {
    /// Walk the output directory and prefix each file with the destination.
    pub async fn collect(out_dir: &Path, destination: &Destination) -> Result<Self> {
        let entries = walk_files(out_dir)
            .map_ok(|relative| destination.url_for(&relative))
            .try_collect()
            .await?;
        Ok(Self { entries })
    }

    /// Heading, blank line, then one `- <url>` line per entry. No trailing
    /// newline.
    pub fn render(&self) -> String {
        let list = self
            .entries
            .iter()
            .map(|entry| format!("- {entry}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{HEADING}\n\n{list}")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collect, render and write the manifest into the output directory.
///
/// Returns the manifest and the path it was written to.
pub async fn write_manifest(
    out_dir: &Path,
    destination: &Destination,
    file_name: &str,
) -> Result<(Manifest, PathBuf)> {
    let manifest = Manifest::collect(out_dir, destination).await?;
    let path = out_dir.join(file_name);
    tokio::fs::write(&path, manifest.render())
        .await
        .map_err(|e| walk_error(&path, e))?;
    Ok((manifest, path))
}
