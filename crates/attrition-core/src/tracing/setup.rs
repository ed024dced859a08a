//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `ATTRITION_LOG` for per-crate log levels.
/// Format: `ATTRITION_LOG=attrition_model=debug,attrition_report=warn`
///
/// Falls back to `attrition=info` if `ATTRITION_LOG` is not set or is invalid.
/// Output goes to stderr; stdout is reserved for the report.
///
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ATTRITION_LOG")
            .unwrap_or_else(|_| EnvFilter::new("attrition=info"));

        // A test harness may have installed a global subscriber already.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
