//! The single JSON result line of an invocation.
//!
//! Wire shape, one line on standard output:
//!
//! ```text
//! {"status":"success", "message":"<msg>", "details":{"k":"v","k2":"v2"}}
//! {"status":"error", "message":"<msg>"}
//! ```
//!
//! Top-level members are separated by `", "`, nested ones by `","`. String
//! escaping is serde_json's, which covers `\\ \" \b \f \n \r \t` and emits
//! `\u00XX` for the remaining control characters.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::error::PluginError;

/// Key/value pairs attached to a success envelope.
pub type Details = BTreeMap<String, String>;

/// Outcome of a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success {
    pub message: String,
    pub details: Details,
}

impl Success {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Details::new(),
        }
    }

    pub fn with_details(mut self, details: Details) -> Self {
        self.details = details;
        self
    }

    pub fn detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Terminal result of an invocation, consumed by [`Response::emit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Success(Success),
    Error {
        message: String,
        exit_code: u8,
        diagnostic: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Envelope<'a> {
    Success {
        message: &'a str,
        #[serde(skip_serializing_if = "no_details")]
        details: &'a Details,
    },
    Error {
        message: &'a str,
    },
}

fn no_details(details: &&Details) -> bool {
    details.is_empty()
}

impl Response {
    pub fn success(message: impl Into<String>, details: Details) -> Self {
        Response::Success(Success::new(message).with_details(details))
    }

    /// Error envelope. An exit code of 0 is raised to 1: errors never exit cleanly.
    pub fn error(message: impl Into<String>, exit_code: u8, diagnostic: Option<String>) -> Self {
        Response::Error {
            message: message.into(),
            exit_code: exit_code.max(1),
            diagnostic,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Response::Success(_) => 0,
            Response::Error { exit_code, .. } => *exit_code,
        }
    }

    fn envelope(&self) -> Envelope<'_> {
        match self {
            Response::Success(success) => Envelope::Success {
                message: &success.message,
                details: &success.details,
            },
            Response::Error { message, .. } => Envelope::Error { message },
        }
    }

    /// Serialize the envelope without the trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<(), serde_json::Error> {
        let mut ser = serde_json::Serializer::with_formatter(out, EnvelopeFormatter::default());
        self.envelope().serialize(&mut ser)
    }

    /// Write the envelope line to `out`, any diagnostic to `err`, and return
    /// the exit code the process must end with.
    pub fn emit<O: Write, E: Write>(self, out: &mut O, err: &mut E) -> io::Result<u8> {
        self.write_json(out)?;
        out.write_all(b"\n")?;
        out.flush()?;

        if let Response::Error {
            diagnostic: Some(diagnostic),
            ..
        } = &self
        {
            writeln!(err, "{diagnostic}")?;
            err.flush()?;
        }
        Ok(self.exit_code())
    }
}

impl From<Result<Success, PluginError>> for Response {
    fn from(result: Result<Success, PluginError>) -> Self {
        match result {
            Ok(success) => Response::Success(success),
            Err(err) => Response::error(
                err.to_string(),
                err.exit_code(),
                err.diagnostic().map(str::to_owned),
            ),
        }
    }
}

/// Compact JSON with `", "` between top-level members.
#[derive(Default)]
struct EnvelopeFormatter {
    depth: usize,
}

impl Formatter for EnvelopeFormatter {
    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.depth += 1;
        writer.write_all(b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.depth = self.depth.saturating_sub(1);
        writer.write_all(b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        match (first, self.depth) {
            (true, _) => Ok(()),
            (false, 1) => writer.write_all(b", "),
            (false, _) => writer.write_all(b","),
        }
    }
}
