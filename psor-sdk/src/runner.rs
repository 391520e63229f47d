//! Plugin procedure and the process-level dispatch point.
//!
//! `invoke` takes an invocation from raw tokens to a `Result`; `run` is the
//! only place that turns that result into output and an exit code. No helper
//! ends the process, so a failed validation can never fall through into the
//! action.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use psor_config::{PsorConfig, DEFAULT_LEVEL};
use psor_telemetry::{action_span, EventLogger};
use tracing::{debug, error, info};

use crate::error::PluginError;
use crate::params::{FromParameters, ParameterMap};
use crate::response::{Response, Success};

/// One remediation action.
pub trait Plugin {
    /// Typed parameters validated before [`Plugin::execute`] runs.
    type Params: FromParameters;

    /// Executable name, used for log context.
    const NAME: &'static str;

    /// Perform the action. `raw` is the full parameter map, which by
    /// convention becomes the success details.
    fn execute(&mut self, params: Self::Params, raw: &ParameterMap)
        -> Result<Success, PluginError>;
}

/// Parse `tokens`, validate them into `P::Params` and execute.
pub fn invoke<P, I, S>(plugin: &mut P, tokens: I) -> Result<Success, PluginError>
where
    P: Plugin,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let raw = ParameterMap::parse(tokens);
    debug!(count = raw.len(), "Parsed invocation parameters");

    let params = P::Params::from_parameters(&raw)?;
    plugin.execute(params, &raw)
}

/// Load configuration, build the plugin, invoke it with the process arguments
/// and emit exactly one envelope.
pub fn run<P, F>(build: F) -> ExitCode
where
    P: Plugin,
    F: FnOnce(&PsorConfig) -> Result<P, PluginError>,
{
    let tokens = std::env::args_os().skip(1).map(lossy);
    let result = match PsorConfig::load() {
        Ok(config) => {
            EventLogger::init(&config.telemetry.level);
            dispatch(build, &config, tokens)
        }
        Err(err) => {
            EventLogger::init(DEFAULT_LEVEL);
            Err(err.into())
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match Response::from(result).emit(&mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!(%err, "Failed to write response");
            ExitCode::FAILURE
        }
    }
}

fn dispatch<P, F, I>(build: F, config: &PsorConfig, tokens: I) -> Result<Success, PluginError>
where
    P: Plugin,
    F: FnOnce(&PsorConfig) -> Result<P, PluginError>,
    I: IntoIterator<Item = String>,
{
    let span = action_span(P::NAME);
    let _guard = span.enter();

    let mut plugin = build(config)?;
    let result = invoke(&mut plugin, tokens);
    match &result {
        Ok(_) => info!("Action submitted"),
        Err(err) => info!(exit_code = err.exit_code(), %err, "Action failed"),
    }
    result
}

fn lossy(arg: OsString) -> String {
    arg.to_string_lossy().into_owned()
}
