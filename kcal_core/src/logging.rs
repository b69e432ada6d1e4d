//! Logging infrastructure for kcal.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing for the CLI binary
///
/// `default_level` applies when RUST_LOG is not set; output uses the
/// compact format with color when the terminal supports it.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}
