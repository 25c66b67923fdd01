//! Relaycheck Logging
//!
//! `tracing` subscriber setup shared by the CLI and tests. `RUST_LOG`
//! overrides the default filter when set.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive
pub const DEFAULT_FILTER: &str = "info,relaycheck=info";

/// Filter directive used with `--verbose`
pub const VERBOSE_FILTER: &str = "info,relaycheck=debug";

/// Install the global subscriber.
///
/// `directive` is used when `RUST_LOG` is unset. Installing twice is a no-op.
pub fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

/// Pick the filter directive for a verbosity flag
pub fn filter_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Subscriber for tests: captured by the test harness, safe to call repeatedly
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
