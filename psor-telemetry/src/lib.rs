//! # PSOR Telemetry
//!
//! Structured logging for plugins. Standard output carries the JSON result,
//! so every log line goes to standard error.

pub mod logging;

pub use logging::{action_span, EventLogger};
