//! Result and error types for report loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for doccov operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while loading a coverage report
#[derive(Debug, Error)]
pub enum ScanError {
    /// The report file could not be read
    #[error("Failed to read coverage report {}: {source}", path.display())]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The report is not valid JSON or does not have the expected shape
    #[error("Invalid coverage report {}: {source}", path.display())]
    Parse {
        /// Path of the offending report
        path: PathBuf,
        /// Deserialization error with line/column
        #[source]
        source: serde_json::Error,
    },
}

impl ScanError {
    /// Path of the report this error refers to
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
