//! Output formatting

use crate::config::CliConfig;
use crate::config::Verbosity;
use console::{Style, Term};
use doccov::{Finding, ScanSummary, SymbolKind};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Output format for scan results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Machine-readable form of a scan
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    report: String,
    undocumented: &'a [Finding],
    by_kind: &'a BTreeMap<SymbolKind, usize>,
    total: usize,
}

/// Renders a scan summary and writes it to stdout
#[derive(Debug)]
pub struct ReportRenderer {
    term: Term,
    format: OutputFormat,
    verbosity: Verbosity,
    /// Whether to use colors
    pub use_color: bool,
}

impl ReportRenderer {
    /// Create a renderer for the given configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            term: Term::stdout(),
            format: config.format,
            verbosity: config.verbosity,
            use_color: config.color.should_color(),
        }
    }

    /// Override color detection
    #[must_use]
    pub const fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// `Loading coverage file: <path>`
    #[must_use]
    pub fn announcement(&self, report: &Path) -> String {
        format!("Loading coverage file: {}", report.display())
    }

    /// `[<file>:<line>]  <symbol>`, symbol in yellow when colored
    #[must_use]
    pub fn finding_line(&self, finding: &Finding) -> String {
        let symbol = if self.use_color {
            Style::new()
                .yellow()
                .force_styling(true)
                .apply_to(&finding.symbol)
                .to_string()
        } else {
            finding.symbol.clone()
        };
        format!("[{}]  {}", finding.location(), symbol)
    }

    /// `Undocumented symbols: <N>`
    #[must_use]
    pub fn summary_line(&self, total: usize) -> String {
        format!("Undocumented symbols: {total}")
    }

    /// Full text rendering, one line per entry
    #[must_use]
    pub fn render_text(&self, report: &Path, summary: &ScanSummary) -> String {
        let mut output = String::new();

        if !self.verbosity.is_quiet() {
            output.push_str(&self.announcement(report));
            output.push('\n');
            for finding in &summary.findings {
                output.push_str(&self.finding_line(finding));
                output.push('\n');
            }
        }

        output.push_str(&self.summary_line(summary.total()));
        output.push('\n');

        if self.verbosity.is_verbose() && !summary.by_kind.is_empty() {
            output.push_str("By kind:\n");
            for (kind, count) in &summary.by_kind {
                output.push_str(&format!("  {kind}: {count}\n"));
            }
        }

        if self.verbosity.is_debug() {
            output.push_str(&format!(
                "Scanned {} symbols in {} files\n",
                summary.symbols_scanned, summary.files_scanned
            ));
        }

        output
    }

    /// JSON rendering
    pub fn render_json(
        &self,
        report: &Path,
        summary: &ScanSummary,
    ) -> Result<String, serde_json::Error> {
        let doc = JsonReport {
            report: report.to_string_lossy().into_owned(),
            undocumented: &summary.findings,
            by_kind: &summary.by_kind,
            total: summary.total(),
        };
        let mut json = serde_json::to_string_pretty(&doc)?;
        json.push('\n');
        Ok(json)
    }

    /// Render in the configured format
    pub fn render(&self, report: &Path, summary: &ScanSummary) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text => Ok(self.render_text(report, summary)),
            OutputFormat::Json => self.render_json(report, summary),
        }
    }

    /// Write already-rendered output
    pub fn emit(&self, rendered: &str) -> std::io::Result<()> {
        self.term.write_str(rendered)?;
        self.term.flush()
    }
}
