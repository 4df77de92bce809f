//! Diagnostic logging to stderr.
//!
//! User-facing results are printed by the CLI reporter; this only carries
//! `tracing` events such as skipped lines and per-file operations.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter, e.g. `LOCSHEET_LOG=locsheet=trace`.
pub const LOG_ENV: &str = "LOCSHEET_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
