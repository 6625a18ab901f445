//! Error types for the analyzer.
//!
//! Every failure is scoped to a single user action: the caller renders it as a
//! warning and keeps going.
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The data source was unreachable, answered with an error, or does not know the symbol.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A field that should be numeric (or textual) carried another JSON type.
    #[error("Data format error: unexpected type for field '{field}'")]
    DataFormat { field: String },

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AnalyzerError {
    pub fn data_format(field: &str) -> Self {
        AnalyzerError::DataFormat {
            field: field.to_string(),
        }
    }

    /// Whether the error came from the data source rather than from local I/O.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AnalyzerError::Fetch(_) | AnalyzerError::DataFormat { .. }
        )
    }
}

impl From<reqwest::Error> for AnalyzerError {
    fn from(err: reqwest::Error) -> Self {
        AnalyzerError::Fetch(err.to_string())
    }
}

/// Crate-wide `Result` alias with `AnalyzerError` as the default error.
pub type Result<T, E = AnalyzerError> = std::result::Result<T, E>;
