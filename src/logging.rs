//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is harmless.
pub fn init(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // Fails only when a global subscriber is already installed; keep that one.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
