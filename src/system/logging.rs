//! Logging system initialization
//!
//! Sets up the tracing subscriber for the process. Console output only; the
//! filter is taken from `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// **Note**: must be called only once, during application startup.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();
}
