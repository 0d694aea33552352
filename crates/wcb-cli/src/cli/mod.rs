//! Command-line interface definition for wcb.
//!
//! `wcb` has no subcommands: every invocation is a build. Flags are
//! order-independent.
//!
//! ```text
//! wcb                         local build, served from /dist
//! wcb --minify --clean        also emit .min variants, start from an empty dist
//! wcb --tag v2.0.0            CDN build for tag v2.0.0
//! wcb --tag                   CDN build for the package.json version
//! wcb --branch                CDN build for the current git branch
//! ```


use clap::{Args, Parser};
use std::path::PathBuf;

/// wcb - build a CDN-hosted web component
#[derive(Parser, Debug)]
#[command(
    name = "wcb",
    version,
    about = "Build a CDN-hosted web component",
    long_about = "Rewrites {{DEST}} and {{INFIX}} placeholders in HTML/CSS/JS templates,\n\
                  optionally emits minified .min variants with source maps, copies every\n\
                  other asset and writes CDN-FILES.md listing the public URL of each file."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub build: BuildArgs,
}

/// Arguments for a build
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Also emit minified `.min` variants, with source maps for CSS and JS
    #[arg(long)]
    pub minify: bool,

    /// Delete the output directory before building
    #[arg(long, visible_alias = "clear")]
    pub clean: bool,

    /// Publish under a CDN tag
    ///
    /// Without a value, the `version` field of package.json is used.
    /// Takes precedence over --branch.
    #[arg(long, value_name = "TAG", num_args = 0..=1)]
    pub tag: Option<Option<String>>,

    /// Publish under the currently checked-out git branch
    #[arg(long)]
    pub branch: bool,

    /// Template source directory [default: src]
    #[arg(long = "src", value_name = "DIR")]
    pub src_dir: Option<PathBuf>,

    /// Output directory, relative to the project root [default: dist]
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Project root [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Config file [default: wcb.config.json in the project root, if present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
