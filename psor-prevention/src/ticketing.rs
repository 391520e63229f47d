//! Follow-up tickets for performed remediations.
//!
//! Ticket keys follow the Jira `<PROJECT>-<number>` shape. The simulated
//! client draws the number from `1000..=9999`.

use std::io::{self, Write};

use rand::Rng;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("Ticketing backend rejected issue: {0}")]
    Rejected(String),

    #[error("Failed to write ticketing notice: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub key: String,
}

pub trait TicketingClient {
    fn create_ticket(&mut self, summary: &str, description: &str) -> Result<Ticket, TicketError>;
}

pub struct SimulatedTicketing<R, W = io::Stderr> {
    project_key: String,
    issue_type: String,
    rng: R,
    notices: W,
}

impl<R: Rng> SimulatedTicketing<R> {
    pub fn stderr(project_key: impl Into<String>, issue_type: impl Into<String>, rng: R) -> Self {
        Self::new(project_key, issue_type, rng, io::stderr())
    }
}

impl<R: Rng, W: Write> SimulatedTicketing<R, W> {
    pub fn new(
        project_key: impl Into<String>,
        issue_type: impl Into<String>,
        rng: R,
        notices: W,
    ) -> Self {
        Self {
            project_key: project_key.into(),
            issue_type: issue_type.into(),
            rng,
            notices,
        }
    }

    pub fn notices(&self) -> &W {
        &self.notices
    }
}

impl<R: Rng, W: Write> TicketingClient for SimulatedTicketing<R, W> {
    fn create_ticket(&mut self, summary: &str, description: &str) -> Result<Ticket, TicketError> {
        let key = format!("{}-{}", self.project_key, self.rng.random_range(1000..=9999));
        writeln!(
            self.notices,
            "*** SIMULATION: Would create Jira ticket {key} in project {} with summary='{summary}' ***",
            self.project_key
        )?;
        info!(
            ticket = %key,
            issue_type = %self.issue_type,
            description,
            "Ticket filed"
        );
        Ok(Ticket { key })
    }
}
