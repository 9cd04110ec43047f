//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Default filter when `QUIZQC_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "quizqc_core=info,quizqc_validation=info";

/// Initialize the QuizQC tracing/logging system.
///
/// Reads the `QUIZQC_LOG` environment variable for per-crate log levels.
/// Format: `QUIZQC_LOG=quizqc_validation=debug,quizqc_core=warn`
///
/// Idempotent: only the first call installs a subscriber. A subscriber
/// installed earlier by the host application is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

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
