//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize human-readable logging.
///
/// Reads `BUDGETLENS_LOG` for per-crate log levels, e.g.
/// `BUDGETLENS_LOG=budgetlens_storage=debug,budgetlens_prediction=info`.
/// Falls back to `budgetlens=info`. Only the first call (of either init
/// function) installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(env_filter())
            .init();
    });
}

/// Initialize structured JSON logging with the same filter rules.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(true)
            .with_thread_ids(true)
            .json()
            .init();
    });
}
