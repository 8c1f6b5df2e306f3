//! Tracing setup: subscriber initialization and structured event helpers.

pub mod events;

use std::sync::Once;

use cardmap_core::config::defaults::DEFAULT_LOG_LEVEL;
use cardmap_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "CARDMAP_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `CARDMAP_LOG` for filtering, defaulting to `info`.
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    install(filter, true);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

/// Initialize tracing from the observability config section. `CARDMAP_LOG` still wins.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        // An embedding host may already own the global subscriber.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
