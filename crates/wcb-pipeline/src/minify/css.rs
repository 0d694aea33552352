use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use parcel_sourcemap::SourceMap;

use super::{Minified, MinifyError};
use crate::asset::AssetKind;

/// Minify a stylesheet and build its source map.
pub fn minify_css(source_name: &str, source: &str) -> Result<Minified, MinifyError> {
    let parse_err = |message: String| MinifyError::Parse {
        kind: AssetKind::Css,
        file: source_name.to_string(),
        message,
    };
    let transform_err = |message: String| MinifyError::Transform {
        kind: AssetKind::Css,
        file: source_name.to_string(),
        message,
    };
    let map_err = |message: String| MinifyError::SourceMap {
        file: source_name.to_string(),
        message,
    };

    let mut stylesheet = StyleSheet::parse(
        source,
        ParserOptions {
            filename: source_name.to_string(),
            ..ParserOptions::default()
        },
    )
    .map_err(|e| parse_err(e.to_string()))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| transform_err(e.to_string()))?;

    let mut source_map = SourceMap::new("/");
    source_map.add_source(source_name);
    source_map
        .set_source_content(0, source)
        .map_err(|e| map_err(format!("{e:?}")))?;

    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            source_map: Some(&mut source_map),
            ..PrinterOptions::default()
        })
        .map_err(|e| transform_err(e.to_string()))?;

    let map = source_map
        .to_json(None)
        .map_err(|e| map_err(format!("{e:?}")))?;

    Ok(Minified {
        code: result.code,
        source_map: Some(map),
    })
}
