//! CLI argument definitions using clap

use crate::config::ColorChoice;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use clap::{CommandFactory, Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// doccov: list undocumented symbols from a coverxygen json-v3 report
///
/// Exits with the number of undocumented symbols (0 when everything is
/// documented).
#[derive(Parser, Debug)]
#[command(name = "doccov")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (print the summary line only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", env = "DOCCOV_COLOR")]
    pub color: ColorArg,

    /// Output format
    #[arg(short, long, default_value = "text", env = "DOCCOV_FORMAT")]
    pub format: FormatArg,

    /// Coverage report produced by `coverxygen --format json-v3`
    // Collected loosely so the count can be checked by `report_path`.
    #[arg(value_name = "REPORT")]
    pub reports: Vec<PathBuf>,
}

impl Cli {
    /// The single report path, or a usage error
    pub fn report_path(&self) -> CliResult<&Path> {
        match self.reports.as_slice() {
            [path] => Ok(path.as_path()),
            [] => Err(CliError::usage("Missing input file argument")),
            more => Err(CliError::usage(format!(
                "Expected exactly one input file, got {}",
                more.len()
            ))),
        }
    }

    /// Short usage text
    #[must_use]
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum FormatArg {
    /// One line per undocumented symbol
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
