//! Logging setup for the wcb CLI.
//!
//! Installs a `tracing` subscriber with an environment filter and a compact
//! formatter. Pipeline stages log at `info`, individual files at `debug`.
//!
//! # Verbosity
//!
//! 1. `--verbose`: debug level for the wcb crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`: custom filter
//! 4. Default: info level for the wcb crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "wcb=debug,wcb_pipeline=debug,wcb_cli=debug";
const QUIET_FILTER: &str = "wcb=error,wcb_pipeline=error,wcb_cli=error";
const DEFAULT_FILTER: &str = "wcb=info,wcb_pipeline=info,wcb_cli=info";

/// Pick the filter directives for the given flags.
///
/// `RUST_LOG` is only consulted when neither flag is set.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber. Call once, before any logging.
///
/// ```rust,no_run
/// use wcb_cli::logger::init_logger;
///
/// init_logger(false, false, false);
/// tracing::info!("Starting build");
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}
