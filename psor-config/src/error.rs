//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Unified configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Loaded values failed validation.
    #[error("Invalid configuration: {}", format_validation_errors(.0))]
    Validation(#[source] ValidationErrors),

    /// Figment could not parse or extract a layer.
    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields = Vec::new();
    collect_field_errors("", errors, &mut fields);
    fields.sort();
    fields.join("; ")
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errors) => {
                let reasons: Vec<String> = errors
                    .iter()
                    .map(|error| match &error.message {
                        Some(msg) => msg.to_string(),
                        None => error.code.to_string(),
                    })
                    .collect();
                out.push(format!("{path} ({})", reasons.join(", ")));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn nested_field_paths_in_message() {
        let mut inner = ValidationErrors::new();
        inner.add("level", ValidationError::new("invalid_log_level"));
        let mut outer = ValidationErrors::new();
        outer.merge_self("telemetry", Err(inner));

        let message = ConfigError::from(outer).to_string();
        assert_eq!(message, "Invalid configuration: telemetry.level (invalid_log_level)");
    }
}
