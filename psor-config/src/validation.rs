//! Custom validation functions for configuration.

use ipnetwork::IpNetwork;
use validator::ValidationError;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Reject protected ranges rooted at the unspecified address.
pub fn validate_protected_networks(networks: &[IpNetwork]) -> Result<(), ValidationError> {
    if networks.iter().any(|n| n.ip().is_unspecified()) {
        return Err(ValidationError::new("unspecified_network"));
    }
    Ok(())
}

/// Validate a tracing level name.
pub fn validate_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Ticket project keys are short uppercase alphanumeric identifiers (`SEC`, `OPS2`).
pub fn validate_project_key(key: &str) -> Result<(), ValidationError> {
    let valid = !key.is_empty()
        && key.len() <= 10
        && key.starts_with(|c: char| c.is_ascii_uppercase())
        && key
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_project_key"))
    }
}
