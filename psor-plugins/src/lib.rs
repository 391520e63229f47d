//! # psor-plugins
//!
//! Remediation actions. Each action is a [`psor_sdk::Plugin`] generic over
//! its control-plane client, and each has a binary under `src/bin/` that
//! wires in the simulated client from `psor-prevention`.

pub mod actions;
pub mod targets;

pub use actions::{BlockIp, IsolateEndpoint, LogMessage, RevokeIamKey, UnblockIp, UnisolateEndpoint};
pub use targets::{EndpointTarget, IpTarget, KeyTarget, LogLine};
