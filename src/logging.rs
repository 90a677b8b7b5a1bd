//! Logging setup
//!
//! Progress and per-document errors are emitted through `tracing` to stderr,
//! keeping stdout free. `RUST_LOG` takes precedence over the configured filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const VERBOSE_FILTER: &str = "quex=debug";

/// Install the global subscriber. Safe to call more than once.
pub fn init(default_filter: &str, verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { default_filter };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
