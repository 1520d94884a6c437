//! Scan runner

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::exit_codes::count_exit_code;
use crate::output::ReportRenderer;
use doccov::ScanSummary;
use std::path::Path;

/// Loads a report, scans it, and prints the result
#[derive(Debug)]
pub struct ScanRunner {
    renderer: ReportRenderer,
}

impl ScanRunner {
    /// Create a new scan runner
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            renderer: ReportRenderer::new(config),
        }
    }

    /// Create a runner with an explicit renderer
    #[must_use]
    pub const fn with_renderer(renderer: ReportRenderer) -> Self {
        Self { renderer }
    }

    /// Scan `report` and render the outcome, without printing
    ///
    /// # Errors
    ///
    /// Returns error if the report cannot be loaded or rendered
    pub fn render(&self, report: &Path) -> CliResult<(ScanSummary, String)> {
        let summary = doccov::scan_path(report)?;
        tracing::info!(
            report = %report.display(),
            files = summary.files_scanned,
            symbols = summary.symbols_scanned,
            undocumented = summary.total(),
            "scan complete"
        );

        let rendered = self
            .renderer
            .render(report, &summary)
            .map_err(|e| CliError::report_generation(e.to_string()))?;
        Ok((summary, rendered))
    }

    /// Scan `report`, print the result, and return the process exit code
    ///
    /// # Errors
    ///
    /// Returns error if the report cannot be loaded, rendered, or written
    pub fn run(&self, report: &Path) -> CliResult<u8> {
        let (summary, rendered) = self.render(report)?;
        self.renderer.emit(&rendered)?;
        Ok(count_exit_code(summary.total()))
    }
}
