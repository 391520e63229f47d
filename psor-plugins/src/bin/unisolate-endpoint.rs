use std::process::ExitCode;

use psor_plugins::UnisolateEndpoint;
use psor_prevention::SimulatedEdr;

fn main() -> ExitCode {
    psor_sdk::run(|_config| Ok(UnisolateEndpoint::new(SimulatedEdr::stderr())))
}
