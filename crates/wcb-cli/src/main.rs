//! wcb - build a CDN-hosted web component.
//!
//! Parses the command line, initializes logging and runs the build.

use clap::Parser;
use miette::Result;
use wcb_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = commands::build_execute(args.build).await;

    // Convert CLI errors to miette diagnostics for reporting
    result.map(|_| ()).map_err(error::cli_error_to_miette)
}
