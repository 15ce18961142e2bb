//! Tracing/logging initialization.
//!
//! JSON-formatted logs with env-filter control. The guard and login
//! paths emit `warn`/`debug` events; `RUST_LOG` selects what shows up.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). The filter
/// comes from `RUST_LOG`, falling back to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Initialize with an explicit filter directive, ignoring the environment.
///
/// Useful in tests and tools that want a fixed verbosity.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
