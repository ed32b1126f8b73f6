//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `--log-filter` is set
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter: `RUST_LOG`, else `fallback`, else [`DEFAULT_FILTER`]
#[must_use]
pub fn make_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, writing to stderr
///
/// Stdout is reserved for the execution log. Calling this twice is a no-op.
pub fn init(fallback: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
