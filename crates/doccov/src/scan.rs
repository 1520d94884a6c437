//! Undocumented-symbol scan
//!
//! One pass over a [`CoverageReport`], in document order, collecting every
//! symbol that [`SymbolRecord::is_missing_docs`] flags.

use crate::error::ScanResult;
use crate::report::{CoverageReport, SymbolKind, SymbolRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// An undocumented, reportable symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Qualified name
    pub symbol: String,
    /// Originating file
    pub file: String,
    /// 1-based line number
    pub line: u32,
    /// Symbol category
    pub kind: SymbolKind,
}

impl From<&SymbolRecord> for Finding {
    fn from(record: &SymbolRecord) -> Self {
        Self {
            symbol: record.symbol.clone(),
            file: record.file.clone(),
            line: record.line,
            kind: record.kind.clone(),
        }
    }
}

impl Finding {
    /// `<file>:<line>` location
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

/// Result of scanning one report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Findings in report order
    pub findings: Vec<Finding>,
    /// Undocumented counts per kind
    pub by_kind: BTreeMap<SymbolKind, usize>,
    /// File entries visited
    pub files_scanned: usize,
    /// Symbol records visited
    pub symbols_scanned: usize,
}

impl ScanSummary {
    /// Total undocumented symbols
    #[must_use]
    pub fn total(&self) -> usize {
        self.findings.len()
    }

    /// Nothing left to document
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Scan a loaded report
#[must_use]
pub fn scan(report: &CoverageReport) -> ScanSummary {
    let mut summary = ScanSummary::default();

    for (path, symbols) in &report.files {
        let before = summary.findings.len();
        for record in symbols {
            summary.symbols_scanned += 1;
            if record.is_missing_docs() {
                *summary.by_kind.entry(record.kind.clone()).or_default() += 1;
                summary.findings.push(Finding::from(record));
            }
        }
        summary.files_scanned += 1;
        tracing::trace!(
            file = %path,
            undocumented = summary.findings.len() - before,
            "scanned file"
        );
    }

    summary
}

/// Load the report at `path` and scan it
pub fn scan_path(path: impl AsRef<Path>) -> ScanResult<ScanSummary> {
    let report = CoverageReport::load(path)?;
    Ok(scan(&report))
}
