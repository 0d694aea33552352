//! Durations and the build summary.

use console::Term;
use owo_colors::OwoColorize;
use std::time::Duration;
use super::styled;
use wcb_pipeline::BuildReport;

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use wcb_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the per-leaf file counts, the destination and the manifest location.
pub fn print_build_summary(report: &BuildReport) {
    let width = (Term::stderr().size().1 as usize).min(80);
    let rule = "─".repeat(width);

    eprintln!("\n{}", styled("Build Summary", |t| t.bold().underline().to_string()));
    eprintln!("{rule}");

    for leaf in &report.leaves {
        eprintln!(
            "  {} {} {}",
            styled("▸", |t| t.blue().to_string()),
            styled(&format!("{:<10}", leaf.name), |t| t.bright_white().bold().to_string()),
            styled(&files_label(leaf.files_written), |t| t.dimmed().to_string())
        );
    }

    eprintln!("{rule}");
    eprintln!(
        "  {} {}",
        styled("Destination:", |t| t.bold().to_string()),
        styled(report.destination.as_str(), |t| t.green().to_string())
    );
    eprintln!(
        "  {} {} ({})",
        styled("Manifest:", |t| t.bold().to_string()),
        report.manifest_path.display(),
        files_label(report.manifest_entries)
    );
    eprintln!(
        "  {} {}",
        styled("Total:", |t| t.bold().to_string()),
        styled(&files_label(report.files_written()), |t| t.green().to_string())
    );

    if report.manifest_entries == 0 {
        super::warning("The output directory is empty; check the source directory");
    }
}

fn files_label(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{count} files")
    }
}
