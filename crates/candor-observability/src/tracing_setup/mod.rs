//! Tracing setup — structured logging with named event helpers.

pub mod events;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use candor_core::config::{defaults, ObservabilityConfig};
use candor_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize tracing with the default filter.
///
/// Reads `CANDOR_LOG` for the filter, e.g. `CANDOR_LOG=candor_sensitivity=debug`.
/// Falls back to `candor=info`. Idempotent.
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing from configuration. `CANDOR_LOG`, when set and valid,
/// wins over `config.log_filter`. Only the first call has any effect.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));

        if config.json_logs {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();
        }
    });
}
