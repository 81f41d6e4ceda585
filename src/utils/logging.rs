use tracing_subscriber::{fmt, EnvFilter};

/// Set up the tracing subscriber.
/// Reads log level filters from the `RUST_LOG` environment variable,
/// defaulting to "info" when unset.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).init();
}
