//! doccov: list undocumented symbols from a coverxygen report
//!
//! ## Usage
//!
//! ```bash
//! python3 -m coverxygen --xml-dir xml --src-dir src --format json-v3 \
//!     --scope public,protected --output doc-coverage.info
//! doccov doc-coverage.info          # exit code = undocumented count
//! doccov --format json doc-coverage.info
//! ```

use clap::error::ErrorKind;
use clap::Parser;
use doccov_cli::exit_codes::codes;
use doccov_cli::{init_logging, Cli, CliConfig, CliError, CliResult, ScanRunner, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return parse_failure(&e),
    };

    let config = build_config(&cli);
    init_logging(config.verbosity);

    match run(&cli, &config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli, config: &CliConfig) -> CliResult<u8> {
    let report = cli.report_path()?;
    ScanRunner::new(config).run(report)
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.clone().into())
        .with_format(cli.format.clone().into())
}

fn parse_failure(e: &clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        _ => {
            print!("{e}");
            ExitCode::from(codes::USAGE_ERROR)
        }
    }
}

fn report_error(e: &CliError) {
    if e.is_usage() {
        println!("{e}");
        println!();
        println!("{}", Cli::usage());
    } else {
        eprintln!("Error: {e}");
    }
}
