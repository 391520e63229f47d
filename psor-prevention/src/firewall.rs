//! ## psor-prevention::firewall
//! **IP block rules on a firewall/WAF control plane**
//!
//! Only the simulated client exists; it keeps the rule set in memory for the
//! lifetime of the process and prints what a real client would have done.
use std::collections::HashSet;
use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FirewallError {
    #[error("Firewall rejected rule for '{target}': {reason}")]
    Rejected { target: String, reason: String },

    #[error("Failed to write firewall notice: {0}")]
    Io(#[from] io::Error),
}

/// Rule targets are passed as given: an address, a range or a host name.
pub trait FirewallClient {
    fn add_block_rule(&mut self, target: &str) -> Result<(), FirewallError>;
    fn remove_block_rule(&mut self, target: &str) -> Result<(), FirewallError>;
}

pub struct SimulatedFirewall<W = io::Stderr> {
    blocked: HashSet<String>,
    notices: W,
}

impl SimulatedFirewall {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> SimulatedFirewall<W> {
    pub fn new(notices: W) -> Self {
        Self {
            blocked: HashSet::new(),
            notices,
        }
    }

    pub fn notices(&self) -> &W {
        &self.notices
    }

    pub fn is_blocked(&self, target: &str) -> bool {
        self.blocked.contains(target)
    }
}

impl<W: Write> FirewallClient for SimulatedFirewall<W> {
    fn add_block_rule(&mut self, target: &str) -> Result<(), FirewallError> {
        writeln!(self.notices, "*** SIMULATION: Would add block rule for IP '{target}' ***")?;
        self.blocked.insert(target.to_owned());
        info!(rule = target, "Block rule recorded");
        Ok(())
    }

    fn remove_block_rule(&mut self, target: &str) -> Result<(), FirewallError> {
        writeln!(self.notices, "*** SIMULATION: Would remove block rule for IP '{target}' ***")?;
        // removing an absent rule is not an error, unblock is idempotent
        self.blocked.remove(target);
        info!(rule = target, "Block rule removed");
        Ok(())
    }
}
