use psor_prevention::EdrClient;
use psor_sdk::{ParameterMap, Plugin, PluginError, Success};

use crate::targets::{EndpointTarget, ENDPOINT_ID};

/// Restores network access for `endpoint_id`.
pub struct UnisolateEndpoint<E> {
    edr: E,
}

impl<E: EdrClient> UnisolateEndpoint<E> {
    pub fn new(edr: E) -> Self {
        Self { edr }
    }
}

impl<E: EdrClient> Plugin for UnisolateEndpoint<E> {
    type Params = EndpointTarget;
    const NAME: &'static str = "unisolate-endpoint";

    fn execute(
        &mut self,
        target: EndpointTarget,
        _raw: &ParameterMap,
    ) -> Result<Success, PluginError> {
        self.edr
            .release_host(&target.endpoint_id)
            .map_err(PluginError::remote_failure)?;

        Ok(Success::new(format!(
            "Successfully submitted request to UNISOLATE endpoint '{}'.",
            target.endpoint_id
        ))
        .detail(ENDPOINT_ID, target.endpoint_id))
    }
}
