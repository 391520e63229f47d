//! # psor-sdk
//!
//! Invocation contract shared by every remediation plugin:
//!
//! - [`ParameterMap`]: `key=value` tokens parsed from the command line
//! - [`Response`]: the one JSON envelope written to standard output
//! - [`PluginError`]: every non-success ending, each with its exit code
//! - [`run`]: the single dispatch point a plugin's `main` returns through
//!
//! ```rust,no_run
//! use psor_sdk::{run, FromParameters, ParameterMap, Plugin, PluginError, Success};
//!
//! struct Target(String);
//!
//! impl FromParameters for Target {
//!     fn from_parameters(params: &ParameterMap) -> Result<Self, PluginError> {
//!         params.require("target").map(|t| Target(t.to_owned()))
//!     }
//! }
//!
//! struct Echo;
//!
//! impl Plugin for Echo {
//!     type Params = Target;
//!     const NAME: &'static str = "echo";
//!
//!     fn execute(&mut self, params: Target, raw: &ParameterMap) -> Result<Success, PluginError> {
//!         Ok(Success::new(format!("Echoed '{}'", params.0)).with_details(raw.to_details()))
//!     }
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     run(|_config| Ok(Echo))
//! }
//! ```

pub mod error;
pub mod params;
pub mod response;
pub mod runner;

pub use error::PluginError;
pub use params::{FromParameters, ParameterMap};
pub use response::{Details, Response, Success};
pub use runner::{invoke, run, Plugin};

pub use psor_config::PsorConfig;
