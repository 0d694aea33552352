use std::path::PathBuf;

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc_minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use super::{Minified, MinifyError};
use crate::asset::AssetKind;

/// Compress, mangle and print a script as an ES module, with a source map.
pub fn minify_js(source_name: &str, source: &str) -> Result<Minified, MinifyError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();

    if let Some(error) = ret.errors.first() {
        return Err(MinifyError::Parse {
            kind: AssetKind::Js,
            file: source_name.to_string(),
            message: error.to_string(),
        });
    }
    if ret.panicked {
        return Err(MinifyError::Parse {
            kind: AssetKind::Js,
            file: source_name.to_string(),
            message: "parser aborted".to_string(),
        });
    }

    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let minified = Minifier::new(options).minify(&allocator, &mut program);

    let output = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            source_map_path: Some(PathBuf::from(source_name)),
            ..CodegenOptions::default()
        })
        .with_scoping(minified.scoping)
        .build(&program);

    Ok(Minified {
        code: output.code,
        source_map: output.map.map(|map| map.to_json_string()),
    })
}
