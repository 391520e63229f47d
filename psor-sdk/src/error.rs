//! Terminal failures of a plugin invocation.

use psor_config::ConfigError;
use thiserror::Error;

/// Exit code for a missing or empty required parameter.
pub const EXIT_MISSING_PARAMETER: u8 = 1;
/// Exit code for a parameter that is present but unusable.
pub const EXIT_INVALID_PARAMETER: u8 = 2;
/// Exit code for an action refused by the safety policy.
pub const EXIT_POLICY_VIOLATION: u8 = 3;
/// Exit code for a collaborator that rejected or failed the action.
pub const EXIT_REMOTE_FAILURE: u8 = 4;
/// Exit code for a collaborator that could not be reached at all.
pub const EXIT_REMOTE_UNREACHABLE: u8 = 127;
/// Exit code for configuration that failed to load (`EX_CONFIG`).
pub const EXIT_CONFIG: u8 = 78;

/// Every way an invocation can end without success. Each variant becomes one
/// error envelope carrying [`PluginError::exit_code`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter: {name} ('{value}' {reason})")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Action blocked by safety policy: {0}")]
    PolicyViolation(String),

    /// The collaborator behind the action failed.
    #[error("{message}")]
    RemoteAction {
        message: String,
        exit_code: u8,
        diagnostic: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PluginError {
    pub fn invalid(name: &str, value: &str, reason: impl Into<String>) -> Self {
        PluginError::InvalidParameter {
            name: name.to_owned(),
            value: value.to_owned(),
            reason: reason.into(),
        }
    }

    pub fn remote(
        message: impl Into<String>,
        exit_code: u8,
        diagnostic: Option<String>,
    ) -> Self {
        PluginError::RemoteAction {
            message: message.into(),
            exit_code,
            diagnostic,
        }
    }

    /// Collaborator failure with the generic remote exit code.
    pub fn remote_failure(err: impl std::error::Error) -> Self {
        PluginError::remote(err.to_string(), EXIT_REMOTE_FAILURE, None)
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            PluginError::MissingParameter(_) => EXIT_MISSING_PARAMETER,
            PluginError::InvalidParameter { .. } => EXIT_INVALID_PARAMETER,
            PluginError::PolicyViolation(_) => EXIT_POLICY_VIOLATION,
            PluginError::RemoteAction { exit_code, .. } => *exit_code,
            PluginError::Config(_) => EXIT_CONFIG,
        }
    }

    /// Text for standard error, written verbatim after the envelope.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            PluginError::RemoteAction { diagnostic, .. } => diagnostic.as_deref(),
            _ => None,
        }
    }
}
