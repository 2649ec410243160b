//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize the Tractor tracing/logging system.
///
/// Reads the `TRACTOR_LOG` environment variable for per-module log levels.
/// Format: `TRACTOR_LOG=tractor_reclassify=debug,tractor_io=warn`
///
/// Falls back to `tractor=info` (`tractor=debug` when `verbose`) if
/// `TRACTOR_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            defaults::VERBOSE_LOG_FILTER
        } else {
            defaults::DEFAULT_LOG_FILTER
        };
        let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
