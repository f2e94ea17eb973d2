//! Diagnostic logging
//!
//! Library code emits `tracing` events; the binary installs a stderr
//! subscriber so stdout stays reserved for reports and NDJSON.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `assetgz=debug`.
pub const LOG_ENV: &str = "ASSETGZ_LOG";

/// Filter directive for a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `ASSETGZ_LOG` wins over the `-v` count.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("assetgz={}", level_for_verbosity(verbose))));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
