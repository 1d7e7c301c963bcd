//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the gridcast tracing/logging system.
///
/// Reads the `GRIDCAST_LOG` environment variable for per-subsystem log
/// levels, e.g. `GRIDCAST_LOG=gridcast_engine=debug,gridcast_core=info`.
/// Falls back to `gridcast=info` if unset or invalid.
///
/// Idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("GRIDCAST_LOG")
            .unwrap_or_else(|_| EnvFilter::new("gridcast=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
