//! Destination resolution.
//!
//! The destination is the public base URL under which the output directory
//! will be served. It is computed once per run and substituted for
//! `{{DEST}}` and used to prefix every manifest entry.
//!
//! | Source            | Destination                          |
//! |-------------------|--------------------------------------|
//! | local             | `/<out-dir>`                         |
//! | tag with value    | `<prefix><value>/<out-dir>`          |
//! | tag without value | `<prefix><package version>/<out-dir>`|
//! | branch            | `<prefix><current branch>/<out-dir>` |

use std::fmt;
use std::path::{Component, Path};

use path_clean::PathClean;

use crate::error::ResolutionError;
use crate::package;
use crate::vcs::VersionControl;

/// Public base URL for the output directory. Never ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination(String);

impl Destination {
    /// Site-relative destination for local builds.
    pub fn local(out_segment: &str) -> Self {
        Self(format!("/{out_segment}"))
    }

    /// CDN destination for a tag, version or branch.
    pub fn cdn(prefix: &str, identifier: &str, out_segment: &str) -> Self {
        Self(format!("{prefix}{identifier}/{out_segment}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public URL of a file, given its path relative to the output directory.
    pub fn url_for(&self, relative: &Path) -> String {
        let mut url = self.0.clone();
        for component in relative.components() {
            if let Component::Normal(part) = component {
                url.push('/');
                url.push_str(&part.to_string_lossy());
            }
        }
        url
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Where the build will be served from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DestinationSource {
    /// Site-relative, served by a local server.
    #[default]
    Local,
    /// A CDN tag. `None` means the package version.
    Tag(Option<String>),
    /// A CDN branch, named by the current checkout.
    Branch,
}

impl DestinationSource {
    /// Build the source from command-line style flags.
    ///
    /// `tag` is `None` when the tag flag was absent, `Some(None)` when it was
    /// given without a value. An empty value or one that looks like another
    /// flag (`--minify`) counts as no value. The tag wins over `branch`.
    pub fn from_flags(tag: Option<Option<String>>, branch: bool) -> Self {
        match tag {
            Some(Some(value)) if !value.is_empty() && !value.starts_with("--") => {
                DestinationSource::Tag(Some(value))
            }
            Some(_) => DestinationSource::Tag(None),
            None if branch => DestinationSource::Branch,
            None => DestinationSource::Local,
        }
    }

    pub fn is_cdn(&self) -> bool {
        !matches!(self, DestinationSource::Local)
    }
}

impl fmt::Display for DestinationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationSource::Local => f.write_str("local"),
            DestinationSource::Tag(Some(tag)) => write!(f, "tag {tag}"),
            DestinationSource::Tag(None) => f.write_str("tag (package version)"),
            DestinationSource::Branch => f.write_str("branch"),
        }
    }
}

/// Normalize an output directory into the URL segment used after the base.
///
/// `./dist/` and `dist` both become `dist`; nested directories are joined
/// with `/`. Returns `None` for paths that do not name a subdirectory of the
/// project root (empty, `.`, absolute, or escaping with `..`).
pub fn out_dir_segment(out_dir: &Path) -> Option<String> {
    let cleaned = out_dir.clean();
    let mut parts = Vec::new();
    for component in cleaned.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Inputs needed to turn a [`DestinationSource`] into a [`Destination`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    pub cdn_prefix: &'a str,
    pub out_segment: &'a str,
    pub project_root: &'a Path,
    pub package_manifest: &'a Path,
    pub version_control: &'a dyn VersionControl,
}

impl Resolver<'_> {
    /// Compute the destination. Local builds do no I/O.
    pub async fn resolve(
        &self,
        source: &DestinationSource,
    ) -> Result<Destination, ResolutionError> {
        let identifier = match source {
            DestinationSource::Local => return Ok(Destination::local(self.out_segment)),
            DestinationSource::Tag(Some(tag)) => tag.clone(),
            DestinationSource::Tag(None) => package::read_version(self.package_manifest).await?,
            DestinationSource::Branch => {
                self.version_control
                    .current_branch(self.project_root)
                    .await?
            }
        };

        Ok(Destination::cdn(
            self.cdn_prefix,
            &identifier,
            self.out_segment,
        ))
    }
}
