//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the acmop tracing/logging system.
///
/// Reads `ACMOP_LOG` for per-subsystem log levels.
/// Format: `ACMOP_LOG=acmop_geometry=debug,acmop_variant=info`
///
/// Falls back to `acmop=info` if `ACMOP_LOG` is not set or is invalid.
/// Calling it more than once is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ACMOP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("acmop=info"));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
