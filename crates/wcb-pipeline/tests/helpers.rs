//! Shared test utilities for wcb-pipeline tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use wcb_pipeline::{
    AssetKind, AssetMinifier, Minified, MinifyError, NativeMinifier, PipelineOptions,
    ResolutionError, VersionControl,
};

pub const TEST_PREFIX: &str = "https://cdn.example/gh/owner/repo@";

/// Branch lookup with a fixed answer.
#[derive(Debug)]
pub struct FixedBranch(pub &'static str);

#[async_trait]
impl VersionControl for FixedBranch {
    async fn current_branch(&self, _root: &Path) -> Result<String, ResolutionError> {
        Ok(self.0.to_string())
    }
}

/// Branch lookup that always fails, as outside a repository.
#[derive(Debug)]
pub struct NoRepository;

#[async_trait]
impl VersionControl for NoRepository {
    async fn current_branch(&self, _root: &Path) -> Result<String, ResolutionError> {
        Err(ResolutionError::VcsFailed {
            command: "git rev-parse --abbrev-ref HEAD".to_string(),
            status: "exit status: 128".to_string(),
            stderr: "fatal: not a git repository".to_string(),
        })
    }
}

/// Native minifier that rejects one asset kind.
#[derive(Debug)]
pub struct FailingOn(pub AssetKind);

impl AssetMinifier for FailingOn {
    fn minify(
        &self,
        kind: AssetKind,
        source_name: &str,
        source: &str,
    ) -> Result<Minified, MinifyError> {
        if kind == self.0 {
            return Err(MinifyError::Transform {
                kind,
                file: source_name.to_string(),
                message: "simulated failure".to_string(),
            });
        }
        NativeMinifier.minify(kind, source_name, source)
    }
}

/// Write `files` (relative path, contents) under `root`.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}

/// A small component project: templates, a nested stylesheet, an image and
/// a package manifest.
pub fn component_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_files(
        temp.path(),
        &[
            (
                "src/index.html",
                "<!doctype html>\n<html>\n  <head>\n    <link rel=\"stylesheet\" href=\"{{DEST}}/styles/card{{INFIX}}.css\">\n  </head>\n  <body>\n    <script type=\"module\" src=\"{{DEST}}/card{{INFIX}}.js\"></script>\n  </body>\n</html>\n",
            ),
            (
                "src/styles/card.css",
                ".card {\n  background: url('{{DEST}}/img/bg.svg');\n  padding: 8px;\n}\n",
            ),
            (
                "src/card.js",
                "const templateUrl = '{{DEST}}/index{{INFIX}}.html';\nexport function load() {\n  return fetch(templateUrl);\n}\n",
            ),
            ("src/img/bg.svg", "<svg xmlns=\"http://www.w3.org/2000/svg\"/>"),
            ("package.json", r#"{"name":"card","version":"1.4.2"}"#),
        ],
    );
    temp
}

/// Options for a project with the test prefix and a fixed branch.
pub fn options(root: &Path) -> PipelineOptions {
    PipelineOptions::new(root)
        .cdn_prefix(TEST_PREFIX)
        .version_control(Arc::new(FixedBranch("main")))
}

/// Every file under `dir`, relative, sorted.
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}
