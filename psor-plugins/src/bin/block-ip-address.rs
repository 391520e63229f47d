use std::process::ExitCode;

use psor_plugins::BlockIp;
use psor_prevention::SimulatedFirewall;

fn main() -> ExitCode {
    psor_sdk::run(|config| {
        Ok(BlockIp::new(
            SimulatedFirewall::stderr(),
            config.firewall.clone(),
        ))
    })
}
