//! Logging for tests

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a test-friendly subscriber once per process.
///
/// Honors `RUST_LOG`, defaulting to `debug` for the resolver crate. Later
/// calls are no-ops, so every test may call it.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sonic_cfg_resolver=debug"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_test_writer(),
        )
        .try_init();
}
