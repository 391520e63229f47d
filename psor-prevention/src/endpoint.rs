//! EDR network isolation.

use std::collections::HashSet;
use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum EdrError {
    #[error("Endpoint '{0}' is unknown to the EDR platform")]
    UnknownEndpoint(String),

    #[error("Failed to write EDR notice: {0}")]
    Io(#[from] io::Error),
}

pub trait EdrClient {
    fn isolate_host(&mut self, endpoint_id: &str) -> Result<(), EdrError>;
    fn release_host(&mut self, endpoint_id: &str) -> Result<(), EdrError>;
}

pub struct SimulatedEdr<W = io::Stderr> {
    isolated: HashSet<String>,
    notices: W,
}

impl SimulatedEdr {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> SimulatedEdr<W> {
    pub fn new(notices: W) -> Self {
        Self {
            isolated: HashSet::new(),
            notices,
        }
    }

    pub fn notices(&self) -> &W {
        &self.notices
    }

    pub fn is_isolated(&self, endpoint_id: &str) -> bool {
        self.isolated.contains(endpoint_id)
    }
}

impl<W: Write> EdrClient for SimulatedEdr<W> {
    fn isolate_host(&mut self, endpoint_id: &str) -> Result<(), EdrError> {
        writeln!(
            self.notices,
            "*** SIMULATION: Would trigger network isolation for endpoint '{endpoint_id}' ***"
        )?;
        self.isolated.insert(endpoint_id.to_owned());
        info!(endpoint_id, "Isolation requested");
        Ok(())
    }

    fn release_host(&mut self, endpoint_id: &str) -> Result<(), EdrError> {
        writeln!(
            self.notices,
            "*** SIMULATION: Would remove network isolation for endpoint '{endpoint_id}' ***"
        )?;
        self.isolated.remove(endpoint_id);
        info!(endpoint_id, "Isolation release requested");
        Ok(())
    }
}
