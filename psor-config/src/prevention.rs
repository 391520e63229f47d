//! Safety limits for the remediation actions.
//!
//! - Firewall: networks that must never receive a block rule
//! - Endpoint: hosts that must never be isolated

use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Firewall safety configuration.
#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FirewallConfig {
    /// Corporate ranges that block actions refuse to touch.
    #[validate(custom(function = validation::validate_protected_networks))]
    #[serde(default)]
    pub protected_networks: Vec<IpNetwork>,

    /// Reject `ip_address` values that are not an IP address literal.
    #[serde(default)]
    pub require_ip_literal: bool,
}

impl FirewallConfig {
    /// First protected network overlapping `target`, if any. `target` may be
    /// an address or a CIDR range; anything else (host names) is never
    /// matched.
    pub fn protecting(&self, target: &str) -> Option<&IpNetwork> {
        let candidate: IpNetwork = target.parse().ok()?;
        self.protected_networks
            .iter()
            .find(|net| net.contains(candidate.network()) || candidate.contains(net.network()))
    }
}

/// Endpoint isolation safety configuration.
#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone)]
pub struct EndpointConfig {
    /// Endpoint identifiers that isolation actions refuse to touch.
    #[serde(default)]
    pub critical_assets: Vec<String>,
}

impl EndpointConfig {
    pub fn is_critical(&self, endpoint_id: &str) -> bool {
        self.critical_assets.iter().any(|asset| asset == endpoint_id)
    }
}
