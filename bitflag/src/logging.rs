//! `tracing` subscriber setup for the binary

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr logger filtered by `RUST_LOG`
///
/// Stdout is reserved for rendered output. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
