// src/logging.rs
// =============================================================================
// Diagnostic logging setup.
//
// Logs go to stderr through `tracing`. stdout is reserved for the crawl's own
// console lines ("Found article: ...") and the optional JSON summary, so
// piping stdout somewhere never mixes in log noise.
//
// The level comes from -v flags unless RUST_LOG is set, which always wins:
//   (none) = warn, -v = info, -vv = debug, -vvv = trace
// =============================================================================

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("term_crawler={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
