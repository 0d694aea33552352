//! Build command implementation.
//!
//! Turns the parsed flags into pipeline options and runs the three-stage
//! pipeline from `wcb-pipeline`.

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::config::{WcbConfig, validate_tag};
use crate::error::Result;
use crate::ui;
use std::time::Instant;
use wcb_pipeline::{BuildReport, DestinationSource};

/// Execute the build command.
///
/// # Build Process
///
/// 1. Resolve the project root (`--cwd` or the current directory)
/// 2. Load and validate configuration (CLI > Env > File > Defaults)
/// 3. Pick the destination from `--tag` / `--branch`
/// 4. Run the pipeline: resolve, build, manifest
/// 5. Display build summary
///
/// # Errors
///
/// Returns errors for invalid configuration, destination resolution
/// failures (git, package.json), task failures and manifest failures.
pub async fn execute(args: BuildArgs) -> Result<BuildReport> {
    let start_time = Instant::now();

    let root = utils::resolve_project_root(args.cwd.as_deref())?;

    let config = WcbConfig::load(&args, &root)?;
    config.validate(&root)?;

    let destination = DestinationSource::from_flags(args.tag.clone(), args.branch);
    if let DestinationSource::Tag(Some(tag)) = &destination {
        validate_tag(tag)?;
    }

    ui::info(&format!(
        "Building {} -> {} ({})",
        config.src_dir.display(),
        config.out_dir.display(),
        destination
    ));
    if config.clean {
        ui::info(&format!("Cleaning output directory: {}", config.out_dir.display()));
    }

    let report = config.pipeline_options(&root, destination).run().await?;

    ui::print_build_summary(&report);
    ui::success(&format!(
        "Build completed in {}",
        ui::format_duration(start_time.elapsed())
    ));

    Ok(report)
}
