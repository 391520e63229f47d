//! ## psor-telemetry::logging
//! **stderr logger built on `tracing`**
//!
//! The filter comes from `PSOR_LOG` when set, otherwise from the configured
//! level. Initialization is idempotent so tests and binaries can both call it.

use tracing::{info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "PSOR_LOG";

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Install the global stderr subscriber. Returns `false` if one was already set.
    pub fn init(level: &str) -> bool {
        fmt()
            .with_env_filter(Self::filter(level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .is_ok()
    }

    fn filter(level: &str) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Span wrapping one plugin invocation.
pub fn action_span(plugin: &'static str) -> Span {
    info_span!("remediation_action", plugin = plugin, otel.kind = "INTERNAL")
}
