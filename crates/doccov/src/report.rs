//! Coverage report model
//!
//! Mirrors the coverxygen `json-v3` output: a top-level `files` object mapping
//! each source path to the symbols extracted from it. File entries keep the
//! order they have in the document.

use crate::error::{ScanError, ScanResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Kinds that describe structure rather than API surface. They never count
/// as undocumented, whatever their `documented` flag says.
pub const NON_REPORTABLE_KINDS: [SymbolKind; 2] = [SymbolKind::File, SymbolKind::Namespace];

/// Symbol category as emitted by the extraction tool
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SymbolKind {
    /// `enum`
    Enum,
    /// `enumvalue`
    EnumValue,
    /// `friend`
    Friend,
    /// `typedef`
    Typedef,
    /// `function`
    Function,
    /// `class`
    Class,
    /// `struct`
    Struct,
    /// `union`
    Union,
    /// `define`
    Define,
    /// `file`
    File,
    /// `namespace`
    Namespace,
    /// Any other tag, kept verbatim
    Other(String),
}

impl SymbolKind {
    /// Tag as it appears in the report
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enum => "enum",
            Self::EnumValue => "enumvalue",
            Self::Friend => "friend",
            Self::Typedef => "typedef",
            Self::Function => "function",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Define => "define",
            Self::File => "file",
            Self::Namespace => "namespace",
            Self::Other(tag) => tag,
        }
    }

    /// Whether an undocumented symbol of this kind counts toward the tally
    #[must_use]
    pub fn is_reportable(&self) -> bool {
        !NON_REPORTABLE_KINDS.contains(self)
    }
}

impl From<&str> for SymbolKind {
    fn from(tag: &str) -> Self {
        match tag {
            "enum" => Self::Enum,
            "enumvalue" => Self::EnumValue,
            "friend" => Self::Friend,
            "typedef" => Self::Typedef,
            "function" => Self::Function,
            "class" => Self::Class,
            "struct" => Self::Struct,
            "union" => Self::Union,
            "define" => Self::Define,
            "file" => Self::File,
            "namespace" => Self::Namespace,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SymbolKind {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl From<SymbolKind> for String {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single symbol entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    /// Qualified name, e.g. `Foo::bar`
    pub symbol: String,
    /// Originating file; may differ from the key it is listed under
    pub file: String,
    /// 1-based line number
    pub line: u32,
    /// Symbol category
    pub kind: SymbolKind,
    /// Whether the symbol carries documentation
    pub documented: bool,
}

impl SymbolRecord {
    /// Undocumented and of a reportable kind
    #[must_use]
    pub fn is_missing_docs(&self) -> bool {
        !self.documented && self.kind.is_reportable()
    }
}

/// A whole-project coverage snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Symbols grouped by source file, in document order
    pub files: IndexMap<String, Vec<SymbolRecord>>,
}

impl CoverageReport {
    /// Read and parse a report from disk
    pub fn load(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let report = Self::from_json(&content).map_err(|source| ScanError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            files = report.file_count(),
            symbols = report.symbol_count(),
            "loaded coverage report"
        );
        Ok(report)
    }

    /// Parse a report from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of file entries
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of symbol records across all files
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Every symbol record, file by file, in document order
    pub fn symbols(&self) -> impl Iterator<Item = &SymbolRecord> {
        self.files.values().flatten()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "files": {
            "src/b.hpp": [
                {"symbol": "B", "file": "src/b.hpp", "line": 3, "kind": "class", "documented": true},
                {"symbol": "B::run", "file": "src/b.hpp", "line": 9, "kind": "function", "documented": false}
            ],
            "src/a.hpp": [
                {"symbol": "src/a.hpp", "file": "src/a.hpp", "line": 1, "kind": "file", "documented": false}
            ]
        }
    }"#;

    mod symbol_kind_tests {
        use super::*;

        #[test]
        fn test_known_tags_round_trip() {
            for tag in [
                "enum",
                "enumvalue",
                "friend",
                "typedef",
                "function",
                "class",
                "struct",
                "union",
                "define",
                "file",
                "namespace",
            ] {
                let kind = SymbolKind::from(tag);
                assert!(!matches!(kind, SymbolKind::Other(_)), "{tag}");
                assert_eq!(kind.as_str(), tag);
            }
        }

        #[test]
        fn test_unknown_tag_is_kept() {
            let kind = SymbolKind::from("variable".to_string());
            assert_eq!(kind, SymbolKind::Other("variable".to_string()));
            assert_eq!(kind.to_string(), "variable");
        }

        #[test]
        fn test_tags_are_case_sensitive() {
            assert_eq!(
                SymbolKind::from("File"),
                SymbolKind::Other("File".to_string())
            );
        }

        #[test]
        fn test_only_file_and_namespace_are_excluded() {
            assert!(!SymbolKind::File.is_reportable());
            assert!(!SymbolKind::Namespace.is_reportable());
            assert!(SymbolKind::Function.is_reportable());
            assert!(SymbolKind::EnumValue.is_reportable());
            assert!(SymbolKind::Define.is_reportable());
            assert!(SymbolKind::Other("page".to_string()).is_reportable());
        }

        #[test]
        fn test_serde_uses_plain_string() {
            let json = serde_json::to_string(&SymbolKind::EnumValue).unwrap();
            assert_eq!(json, "\"enumvalue\"");
            let kind: SymbolKind = serde_json::from_str("\"namespace\"").unwrap();
            assert_eq!(kind, SymbolKind::Namespace);
        }
    }

    mod symbol_record_tests {
        use super::*;

        fn record(kind: SymbolKind, documented: bool) -> SymbolRecord {
            SymbolRecord {
                symbol: "x".to_string(),
                file: "x.h".to_string(),
                line: 1,
                kind,
                documented,
            }
        }

        #[test]
        fn test_missing_docs() {
            assert!(record(SymbolKind::Function, false).is_missing_docs());
            assert!(!record(SymbolKind::Function, true).is_missing_docs());
            assert!(!record(SymbolKind::File, false).is_missing_docs());
            assert!(!record(SymbolKind::Namespace, false).is_missing_docs());
        }

        #[test]
        fn test_missing_field_is_rejected() {
            let json = r#"{"symbol": "a", "file": "a.h", "line": 1, "documented": false}"#;
            let err = serde_json::from_str::<SymbolRecord>(json).unwrap_err();
            assert!(err.to_string().contains("missing field `kind`"));
        }

        #[test]
        fn test_wrong_type_is_rejected() {
            let json =
                r#"{"symbol": "a", "file": "a.h", "line": "1", "kind": "enum", "documented": false}"#;
            assert!(serde_json::from_str::<SymbolRecord>(json).is_err());
        }

        #[test]
        fn test_extra_fields_are_ignored() {
            let json = r#"{"symbol": "a", "file": "a.h", "line": 4, "kind": "enum", "documented": true, "scope": "public"}"#;
            let record: SymbolRecord = serde_json::from_str(json).unwrap();
            assert_eq!(record.line, 4);
            assert_eq!(record.kind, SymbolKind::Enum);
        }
    }

    mod coverage_report_tests {
        use super::*;

        #[test]
        fn test_from_json_preserves_file_order() {
            let report = CoverageReport::from_json(SAMPLE).unwrap();
            let keys: Vec<&str> = report.files.keys().map(String::as_str).collect();
            assert_eq!(keys, ["src/b.hpp", "src/a.hpp"]);
        }

        #[test]
        fn test_counts() {
            let report = CoverageReport::from_json(SAMPLE).unwrap();
            assert_eq!(report.file_count(), 2);
            assert_eq!(report.symbol_count(), 3);
        }

        #[test]
        fn test_symbols_iterates_in_order() {
            let report = CoverageReport::from_json(SAMPLE).unwrap();
            let names: Vec<&str> = report.symbols().map(|s| s.symbol.as_str()).collect();
            assert_eq!(names, ["B", "B::run", "src/a.hpp"]);
        }

        #[test]
        fn test_missing_files_key_is_rejected() {
            let err = CoverageReport::from_json(r#"{"other": {}}"#).unwrap_err();
            assert!(err.to_string().contains("missing field `files`"));
        }

        #[test]
        fn test_empty_files() {
            let report = CoverageReport::from_json(r#"{"files": {}}"#).unwrap();
            assert_eq!(report.file_count(), 0);
            assert_eq!(report.symbols().count(), 0);
        }

        #[test]
        fn test_load_from_disk() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(SAMPLE.as_bytes()).unwrap();
            let report = CoverageReport::load(file.path()).unwrap();
            assert_eq!(report.symbol_count(), 3);
        }

        #[test]
        fn test_load_missing_file() {
            let err = CoverageReport::load("/nonexistent/doc-coverage.info").unwrap_err();
            assert!(matches!(err, ScanError::Read { .. }));
            assert_eq!(
                err.path(),
                Path::new("/nonexistent/doc-coverage.info")
            );
        }

        #[test]
        fn test_load_malformed_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(b"{\"files\": [").unwrap();
            let err = CoverageReport::load(file.path()).unwrap_err();
            assert!(matches!(err, ScanError::Parse { .. }));
        }
    }
}
