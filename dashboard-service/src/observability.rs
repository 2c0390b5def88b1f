use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "dashboard_service=info";

/// `RUST_LOG` when set and valid, otherwise info-level events from this
/// crate only.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs go to stderr; stdout carries the JSON output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
