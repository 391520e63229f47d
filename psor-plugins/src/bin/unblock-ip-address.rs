use std::process::ExitCode;

use psor_plugins::UnblockIp;
use psor_prevention::SimulatedFirewall;

fn main() -> ExitCode {
    psor_sdk::run(|config| {
        Ok(UnblockIp::new(
            SimulatedFirewall::stderr(),
            config.firewall.clone(),
        ))
    })
}
