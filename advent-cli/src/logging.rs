//! Diagnostics via `tracing`, controlled by `RUST_LOG`
//!
//! Answers go to stdout; everything logged here goes to stderr so it never
//! mixes with puzzle output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// Defaults to `warn` when `RUST_LOG` is unset or invalid.
///
/// ```bash
/// RUST_LOG=advent_input=debug advent --day 12
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
