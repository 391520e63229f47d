use psor_prevention::{IamClient, IamError, TicketingClient};
use psor_sdk::error::EXIT_REMOTE_UNREACHABLE;
use psor_sdk::{ParameterMap, Plugin, PluginError, Success};
use tracing::warn;

use crate::targets::{KeyTarget, KEY_ID};

pub const JIRA_TICKET: &str = "jira_ticket";

/// Revokes a leaked access key, then files a follow-up ticket.
///
/// A ticketing failure is logged and leaves `jira_ticket` out of the details;
/// the revocation itself still succeeds.
pub struct RevokeIamKey<I, T> {
    iam: I,
    tickets: T,
}

impl<I: IamClient, T: TicketingClient> RevokeIamKey<I, T> {
    pub fn new(iam: I, tickets: T) -> Self {
        Self { iam, tickets }
    }

    pub fn iam(&self) -> &I {
        &self.iam
    }
}

impl<I: IamClient, T: TicketingClient> Plugin for RevokeIamKey<I, T> {
    type Params = KeyTarget;
    const NAME: &'static str = "revoke-iam-key";

    fn execute(&mut self, target: KeyTarget, _raw: &ParameterMap) -> Result<Success, PluginError> {
        let key_id = target.key_id;

        self.iam.revoke_key(&key_id).map_err(|err| match err {
            IamError::Unreachable { message, cause } => {
                PluginError::remote(message, EXIT_REMOTE_UNREACHABLE, Some(cause))
            }
            other => PluginError::remote_failure(other),
        })?;

        let summary = format!("Remediation: Revoked leaked IAM key {key_id}");
        let description =
            format!("PSOR automatically revoked AWS IAM key {key_id} based on playbook trigger.");

        let mut success = Success::new(format!(
            "Successfully submitted request to revoke IAM key '{key_id}'."
        ));
        match self.tickets.create_ticket(&summary, &description) {
            Ok(ticket) => success = success.detail(JIRA_TICKET, ticket.key),
            Err(err) => warn!(%err, key_id = %key_id, "Failed to file follow-up ticket"),
        }
        Ok(success.detail(KEY_ID, key_id))
    }
}
