//! doccov - undocumented-symbol scanner for coverxygen reports
//!
//! coverxygen turns Doxygen XML into a per-file list of symbols with a
//! `documented` flag. This crate loads that report (`--format json-v3`) and
//! picks out every public or protected symbol still missing documentation.
//!
//! `file` and `namespace` entries are containers, not API surface, so they are
//! never reported. See [`NON_REPORTABLE_KINDS`].
//!
//! ```
//! use doccov::{scan, CoverageReport};
//!
//! let report = CoverageReport::from_json(r#"{"files": {"a.h": [
//!     {"symbol": "Foo::bar", "file": "a.h", "line": 10, "kind": "function", "documented": false},
//!     {"symbol": "a.h", "file": "a.h", "line": 1, "kind": "file", "documented": false}
//! ]}}"#).unwrap();
//!
//! let summary = scan(&report);
//! assert_eq!(summary.total(), 1);
//! assert_eq!(summary.findings[0].location(), "a.h:10");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod report;
mod scan;

pub use error::{ScanError, ScanResult};
pub use report::{CoverageReport, SymbolKind, SymbolRecord, NON_REPORTABLE_KINDS};
pub use scan::{scan, scan_path, Finding, ScanSummary};
