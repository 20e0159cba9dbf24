//! Tracing subscriber setup for the command line tool.

use tracing_subscriber::{
    fmt::{fmt, time::ChronoLocal},
    EnvFilter,
};

/// Installs a stderr subscriber filtered by `RUST_LOG`, `warn` when unset.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("logger initialized");
    }
}
