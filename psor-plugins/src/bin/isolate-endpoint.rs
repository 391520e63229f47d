use std::process::ExitCode;

use psor_plugins::IsolateEndpoint;
use psor_prevention::SimulatedEdr;

fn main() -> ExitCode {
    psor_sdk::run(|config| {
        Ok(IsolateEndpoint::new(
            SimulatedEdr::stderr(),
            config.endpoint.clone(),
        ))
    })
}
