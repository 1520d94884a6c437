//! Error types for the CLI

use crate::exit_codes::codes;
use doccov::ScanError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of arguments
    #[error("Usage error: {message}")]
    Usage {
        /// Error message
        message: String,
    },

    /// Coverage report could not be loaded
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// IO error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report rendering error
    #[error("Report generation failed: {message}")]
    ReportGeneration {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a usage error
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a report generation error
    #[must_use]
    pub fn report_generation(message: impl Into<String>) -> Self {
        Self::ReportGeneration {
            message: message.into(),
        }
    }

    /// Whether this is a usage error
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => codes::USAGE_ERROR,
            Self::Scan(_) | Self::Io(_) | Self::ReportGeneration { .. } => codes::LOAD_ERROR,
        }
    }
}
