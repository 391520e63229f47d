use std::io::{self, Write};

use psor_sdk::{ParameterMap, Plugin, PluginError, Success};

use crate::targets::LogLine;

/// Writes `message` to the notice stream.
pub struct LogMessage<W = io::Stderr> {
    notices: W,
}

impl LogMessage {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> LogMessage<W> {
    pub fn new(notices: W) -> Self {
        Self { notices }
    }

    pub fn notices(&self) -> &W {
        &self.notices
    }
}

impl<W: Write> Plugin for LogMessage<W> {
    type Params = LogLine;
    const NAME: &'static str = "log-message";

    fn execute(&mut self, line: LogLine, raw: &ParameterMap) -> Result<Success, PluginError> {
        let report = format!("Successfully logged message: '{}'", line.message);
        writeln!(self.notices, "*** PLUGIN SIMULATION: {report} ***")
            .map_err(PluginError::remote_failure)?;

        Ok(Success::new(report).with_details(raw.to_details()))
    }
}
