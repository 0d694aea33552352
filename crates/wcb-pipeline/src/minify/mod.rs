//! Minifiers for the three template kinds.
//!
//! HTML is whitespace-collapsed with `minify-html`, CSS goes through
//! `lightningcss` and JavaScript through the oxc minifier. CSS and JS
//! produce a source map alongside the code; HTML does not.
//!
//! Minifiers are synchronous and CPU-bound. Build tasks call them on the
//! blocking thread pool.

mod css;
mod html;
mod js;

use thiserror::Error;

use crate::asset::AssetKind;

pub use css::minify_css;
pub use html::minify_html;
pub use js::minify_js;

/// Minified code and, for CSS and JS, its source map as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minified {
    pub code: String,
    pub source_map: Option<String>,
}

/// A minifier rejected its input.
#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("{kind} syntax error in {file}: {message}")]
    Parse {
        kind: AssetKind,
        file: String,
        message: String,
    },

    #[error("failed to minify {kind} in {file}: {message}")]
    Transform {
        kind: AssetKind,
        file: String,
        message: String,
    },

    #[error("failed to build source map for {file}: {message}")]
    SourceMap { file: String, message: String },
}

/// Turns a rewritten template into its minified variant.
///
/// `source_name` is the source path relative to the source directory, with
/// `/` separators. It is recorded in the source map.
pub trait AssetMinifier: Send + Sync + std::fmt::Debug {
    fn minify(
        &self,
        kind: AssetKind,
        source_name: &str,
        source: &str,
    ) -> Result<Minified, MinifyError>;
}

/// Default minifier set.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeMinifier;

impl AssetMinifier for NativeMinifier {
    fn minify(
        &self,
        kind: AssetKind,
        source_name: &str,
        source: &str,
    ) -> Result<Minified, MinifyError> {
        match kind {
            AssetKind::Html => Ok(Minified {
                code: minify_html(source),
                source_map: None,
            }),
            AssetKind::Css => minify_css(source_name, source),
            AssetKind::Js => minify_js(source_name, source),
        }
    }
}
