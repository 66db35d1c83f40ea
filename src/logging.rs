//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter, e.g. `HUMANAGE_LOG=humanage=debug`.
pub const LOG_ENV: &str = "HUMANAGE_LOG";

/// Install the stderr subscriber. Falls back to `humanage=warn`, or
/// `humanage=debug` when `verbose` is set. Safe to call more than once.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "humanage=debug"
        } else {
            "humanage=warn"
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
