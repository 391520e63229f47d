use std::process::ExitCode;

use psor_plugins::LogMessage;

fn main() -> ExitCode {
    psor_sdk::run(|_config| Ok(LogMessage::stderr()))
}
