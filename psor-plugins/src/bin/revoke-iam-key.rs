use std::process::ExitCode;

use psor_plugins::RevokeIamKey;
use psor_prevention::{SimulatedIam, SimulatedTicketing};

fn main() -> ExitCode {
    psor_sdk::run(|config| {
        let tickets = SimulatedTicketing::stderr(
            config.ticketing.project_key.as_str(),
            config.ticketing.issue_type.as_str(),
            rand::rng(),
        );
        Ok(RevokeIamKey::new(SimulatedIam::stderr(), tickets))
    })
}
