use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const DEFAULT_FILTER: &str = "warn";

/// Builds the log filter: explicit directives first, then `RUST_LOG`, then `warn`.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    if let Some(directives) = directives
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return filter;
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber, writing to stderr so stdout stays machine-readable.
///
/// Later calls are no-ops.
pub fn init_logging(directives: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(directives))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
