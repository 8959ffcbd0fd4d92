use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global `tracing` subscriber from `LEAGUE_SIM_LOG_LEVEL`
/// (or `RUST_LOG`), defaulting to `info` when neither is set.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    fmt().with_env_filter(filter).init();
}
