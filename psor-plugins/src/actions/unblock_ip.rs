use psor_config::FirewallConfig;
use psor_prevention::FirewallClient;
use psor_sdk::{ParameterMap, Plugin, PluginError, Success};

use crate::targets::IpTarget;

/// Removes the block rule for `ip_address`. Never refused by policy.
pub struct UnblockIp<F> {
    firewall: F,
    policy: FirewallConfig,
}

impl<F: FirewallClient> UnblockIp<F> {
    pub fn new(firewall: F, policy: FirewallConfig) -> Self {
        Self { firewall, policy }
    }

    pub fn firewall(&self) -> &F {
        &self.firewall
    }
}

impl<F: FirewallClient> Plugin for UnblockIp<F> {
    type Params = IpTarget;
    const NAME: &'static str = "unblock-ip-address";

    fn execute(&mut self, target: IpTarget, raw: &ParameterMap) -> Result<Success, PluginError> {
        if self.policy.require_ip_literal {
            target.literal()?;
        }

        self.firewall
            .remove_block_rule(&target.text)
            .map_err(PluginError::remote_failure)?;

        Ok(Success::new(format!(
            "Successfully submitted request to UNBLOCK IP address '{}'.",
            target.text
        ))
        .with_details(raw.to_details()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psor_prevention::SimulatedFirewall;
    use psor_sdk::{invoke, Response};

    fn plugin(policy: FirewallConfig) -> UnblockIp<SimulatedFirewall<Vec<u8>>> {
        UnblockIp::new(SimulatedFirewall::new(Vec::new()), policy)
    }

    #[test]
    fn unblocking_twice_is_identical() {
        let mut plugin = plugin(FirewallConfig::default());
        let first = Response::from(invoke(&mut plugin, ["ip_address=10.0.0.5"]));
        let second = Response::from(invoke(&mut plugin, ["ip_address=10.0.0.5"]));

        assert_eq!(first, second);
        assert_eq!(
            first.to_json().unwrap(),
            r#"{"status":"success", "message":"Successfully submitted request to UNBLOCK IP address '10.0.0.5'.", "details":{"ip_address":"10.0.0.5"}}"#
        );
    }

    #[test]
    fn host_name_is_unblocked_as_given() {
        let mut plugin = plugin(FirewallConfig::default());
        let response = Response::from(invoke(&mut plugin, ["ip_address=fw-host.example.com"]));
        assert_eq!(response.exit_code(), 0);
        assert_eq!(
            response.to_json().unwrap(),
            r#"{"status":"success", "message":"Successfully submitted request to UNBLOCK IP address 'fw-host.example.com'.", "details":{"ip_address":"fw-host.example.com"}}"#
        );
    }

    #[test]
    fn literal_required_when_configured() {
        let mut plugin = plugin(FirewallConfig {
            require_ip_literal: true,
            ..Default::default()
        });
        let err = invoke(&mut plugin, ["ip_address=example.com"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(plugin.firewall().notices().is_empty());
    }
}
