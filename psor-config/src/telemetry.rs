//! Logging configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Telemetry configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct TelemetryConfig {
    /// Default tracing level when `PSOR_LOG` is unset.
    #[validate(custom(function = validation::validate_level))]
    #[serde(default = "default_level")]
    pub level: String,
}

/// Level used when no configuration could be loaded.
pub const DEFAULT_LEVEL: &str = "warn";

fn default_level() -> String {
    DEFAULT_LEVEL.into()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}
