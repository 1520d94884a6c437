//! doccov CLI library
//!
//! Argument parsing, configuration, rendering and exit-code mapping for the
//! `doccov` binary. The scan itself lives in the `doccov` crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod exit_codes;
mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg, FormatArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use output::{OutputFormat, ReportRenderer};
pub use runner::ScanRunner;
