use psor_config::FirewallConfig;
use psor_prevention::FirewallClient;
use psor_sdk::{ParameterMap, Plugin, PluginError, Success};
use tracing::warn;

use crate::targets::IpTarget;

/// Adds a block rule for `ip_address` unless it overlaps a protected network.
pub struct BlockIp<F> {
    firewall: F,
    policy: FirewallConfig,
}

impl<F: FirewallClient> BlockIp<F> {
    pub fn new(firewall: F, policy: FirewallConfig) -> Self {
        Self { firewall, policy }
    }

    pub fn firewall(&self) -> &F {
        &self.firewall
    }
}

impl<F: FirewallClient> Plugin for BlockIp<F> {
    type Params = IpTarget;
    const NAME: &'static str = "block-ip-address";

    fn execute(&mut self, target: IpTarget, raw: &ParameterMap) -> Result<Success, PluginError> {
        if self.policy.require_ip_literal {
            target.literal()?;
        }

        if let Some(network) = self.policy.protecting(&target.text) {
            warn!(rule = %target.text, %network, "Refusing to block protected address");
            return Err(PluginError::PolicyViolation(format!(
                "{} is inside protected network {}",
                target.text, network
            )));
        }

        self.firewall
            .add_block_rule(&target.text)
            .map_err(PluginError::remote_failure)?;

        Ok(Success::new(format!(
            "Successfully submitted block rule for IP address '{}'.",
            target.text
        ))
        .with_details(raw.to_details()))
    }
}
