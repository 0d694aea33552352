//! Asset kinds and build modes.
//!
//! A build task is the pair of an [`AssetKind`] (which files it reads) and a
//! [`BuildMode`] (whether it writes plain or `.min` outputs).

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// The three template asset kinds that receive placeholder rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Html,
    Css,
    Js,
}

impl AssetKind {
    /// Every kind, in scheduling order.
    pub const ALL: [AssetKind; 3] = [AssetKind::Html, AssetKind::Css, AssetKind::Js];

    /// File extension selected by this kind, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Html => "html",
            AssetKind::Css => "css",
            AssetKind::Js => "js",
        }
    }

    /// Classify a path by its extension.
    ///
    /// Matching is case-sensitive: `Style.CSS` is not a stylesheet and is
    /// treated as an ordinary passthrough asset.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        AssetKind::ALL.into_iter().find(|kind| kind.extension() == ext)
    }

    /// Whether minified outputs of this kind carry a source map.
    pub fn has_source_map(self) -> bool {
        !matches!(self, AssetKind::Html)
    }

    /// Trailer pointing a minified file at its collocated source map.
    pub fn source_map_comment(self, map_file_name: &str) -> Option<String> {
        match self {
            AssetKind::Html => None,
            AssetKind::Css => Some(format!("\n/*# sourceMappingURL={map_file_name} */")),
            AssetKind::Js => Some(format!("\n//# sourceMappingURL={map_file_name}")),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Plain or minified output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildMode {
    #[default]
    Plain,
    Minified,
}

impl BuildMode {
    /// Infix inserted between a minified file's stem and its extension.
    pub const MINIFIED_INFIX: &'static str = ".min";

    /// Value substituted for `{{INFIX}}` in this mode.
    pub fn infix(self) -> &'static str {
        match self {
            BuildMode::Plain => "",
            BuildMode::Minified => Self::MINIFIED_INFIX,
        }
    }

    /// Relative output path for a relative source path.
    ///
    /// `a/b.js` stays `a/b.js` in plain mode and becomes `a/b.min.js` in
    /// minified mode. Only the last extension is considered, so
    /// `a/b.test.js` becomes `a/b.test.min.js`.
    pub fn output_path(self, relative: &Path) -> PathBuf {
        match self {
            BuildMode::Plain => relative.to_path_buf(),
            BuildMode::Minified => {
                let Some(stem) = relative.file_stem() else {
                    return relative.to_path_buf();
                };
                let mut name = OsString::from(stem);
                name.push(Self::MINIFIED_INFIX);
                if let Some(ext) = relative.extension() {
                    name.push(".");
                    name.push(ext);
                }
                relative.with_file_name(name)
            }
        }
    }
}
