//! Package manifest lookup.
//!
//! A bare `--tag` build publishes under the project's own version, read from
//! the `version` field of `package.json`.

use std::path::Path;

use serde::Deserialize;

use crate::error::ResolutionError;

#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    version: Option<serde_json::Value>,
}

/// Read the `version` string from a JSON package manifest.
pub async fn read_version(path: &Path) -> Result<String, ResolutionError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ResolutionError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

    parse_version(&content, path)
}

fn parse_version(content: &str, path: &Path) -> Result<String, ResolutionError> {
    let manifest: PackageManifest =
        serde_json::from_str(content).map_err(|source| ResolutionError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    // A non-string version counts as missing, like an absent one.
    match manifest.version {
        Some(serde_json::Value::String(version)) if !version.is_empty() => Ok(version),
        _ => Err(ResolutionError::MissingVersion {
            path: path.to_path_buf(),
        }),
    }
}
