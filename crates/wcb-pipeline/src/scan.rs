//! Source selection.
//!
//! Selects files under the source directory the way `src/**/*.<ext>` globs
//! do: recursive, case-sensitive on the extension, and blind to dotfiles and
//! anything inside a dot-directory.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::asset::AssetKind;

/// Which files a walk keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFilter {
    /// Files with the extension of one kind.
    Kind(AssetKind),
    /// Every file that is not HTML, CSS or JS.
    Passthrough,
}

impl SourceFilter {
    pub fn matches(self, relative: &Path) -> bool {
        match self {
            SourceFilter::Kind(kind) => AssetKind::from_path(relative) == Some(kind),
            SourceFilter::Passthrough => AssetKind::from_path(relative).is_none(),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Collect matching files, as paths relative to `src_root`, sorted by path.
pub fn collect_sources_sync(src_root: &Path, filter: SourceFilter) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(src_root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(src_root) else {
            continue;
        };
        if filter.matches(relative) {
            files.push(relative.to_path_buf());
        }
    }
    Ok(files)
}

/// Async wrapper running the walk on the blocking pool.
pub async fn collect_sources(src_root: &Path, filter: SourceFilter) -> io::Result<Vec<PathBuf>> {
    let root = src_root.to_path_buf();
    tokio::task::spawn_blocking(move || collect_sources_sync(&root, filter))
        .await
        .map_err(|e| io::Error::other(format!("Task join error: {e}")))?
}
