use psor_config::EndpointConfig;
use psor_prevention::EdrClient;
use psor_sdk::{ParameterMap, Plugin, PluginError, Success};
use tracing::warn;

use crate::targets::{EndpointTarget, ENDPOINT_ID};

/// Cuts `endpoint_id` off the network through the EDR platform.
pub struct IsolateEndpoint<E> {
    edr: E,
    policy: EndpointConfig,
}

impl<E: EdrClient> IsolateEndpoint<E> {
    pub fn new(edr: E, policy: EndpointConfig) -> Self {
        Self { edr, policy }
    }

    pub fn edr(&self) -> &E {
        &self.edr
    }
}

impl<E: EdrClient> Plugin for IsolateEndpoint<E> {
    type Params = EndpointTarget;
    const NAME: &'static str = "isolate-endpoint";

    fn execute(
        &mut self,
        target: EndpointTarget,
        _raw: &ParameterMap,
    ) -> Result<Success, PluginError> {
        if self.policy.is_critical(&target.endpoint_id) {
            warn!(endpoint_id = %target.endpoint_id, "Refusing to isolate critical asset");
            return Err(PluginError::PolicyViolation(format!(
                "endpoint '{}' is a critical asset",
                target.endpoint_id
            )));
        }

        self.edr
            .isolate_host(&target.endpoint_id)
            .map_err(PluginError::remote_failure)?;

        Ok(Success::new(format!(
            "Successfully submitted network isolation request for endpoint '{}'.",
            target.endpoint_id
        ))
        .detail(ENDPOINT_ID, target.endpoint_id))
    }
}
