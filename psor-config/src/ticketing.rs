//! Ticketing parameters for follow-up issues filed after a remediation.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Ticketing configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct TicketingConfig {
    /// Project receiving remediation tickets.
    #[validate(custom(function = validation::validate_project_key))]
    #[serde(default = "default_project_key")]
    pub project_key: String,

    /// Issue type used for new tickets.
    #[validate(length(min = 1, max = 64))]
    #[serde(default = "default_issue_type")]
    pub issue_type: String,
}

fn default_project_key() -> String {
    "SEC".into()
}
fn default_issue_type() -> String {
    "Task".into()
}

impl Default for TicketingConfig {
    fn default() -> Self {
        Self {
            project_key: default_project_key(),
            issue_type: default_issue_type(),
        }
    }
}
