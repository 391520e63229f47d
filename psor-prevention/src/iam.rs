//! Cloud IAM access key revocation.

use std::collections::HashSet;
use std::io::{self, Write};

use thiserror::Error;
use tracing::{info, warn};

/// Key id the simulated client treats as an unreachable IAM API.
pub const SIMULATED_FAILURE_KEY: &str = "FAIL";

#[derive(Debug, Error)]
pub enum IamError {
    /// The IAM API could not be reached; `cause` is the transport-level detail.
    #[error("{message}")]
    Unreachable { message: String, cause: String },

    #[error("Failed to write IAM notice: {0}")]
    Io(#[from] io::Error),
}

pub trait IamClient {
    fn revoke_key(&mut self, key_id: &str) -> Result<(), IamError>;
}

pub struct SimulatedIam<W = io::Stderr> {
    revoked: HashSet<String>,
    notices: W,
}

impl SimulatedIam {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> SimulatedIam<W> {
    pub fn new(notices: W) -> Self {
        Self {
            revoked: HashSet::new(),
            notices,
        }
    }

    pub fn is_revoked(&self, key_id: &str) -> bool {
        self.revoked.contains(key_id)
    }

    pub fn notices(&self) -> &W {
        &self.notices
    }
}

impl<W: Write> IamClient for SimulatedIam<W> {
    fn revoke_key(&mut self, key_id: &str) -> Result<(), IamError> {
        if key_id == SIMULATED_FAILURE_KEY {
            warn!(key_id, "Simulating unreachable IAM endpoint");
            return Err(IamError::Unreachable {
                message: "Simulated failure: Could not connect to AWS API.".into(),
                cause: "Connection to AWS endpoint failed".into(),
            });
        }

        writeln!(self.notices, "*** SIMULATION: Would revoke IAM key '{key_id}' ***")?;
        self.revoked.insert(key_id.to_owned());
        info!(key_id, "Key revocation requested");
        Ok(())
    }
}
