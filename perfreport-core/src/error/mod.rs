//! Core error types for perfreport

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for report operations
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing field '{field}' in record {row}")]
    MissingField { field: String, row: usize },

    #[error("Invalid value '{value}' for field '{field}' in record {row}")]
    InvalidValue {
        field: String,
        value: String,
        row: usize,
    },

    #[error("Value '{value}' for field '{field}' in record {row} is outside the supported range")]
    ValueOutOfRange {
        field: String,
        value: String,
        row: usize,
    },

    #[error("Total of field '{field}' for '{group}' exceeds the supported range at record {row}")]
    SumOverflow {
        field: String,
        group: String,
        row: usize,
    },

    #[error("Unknown report: {name} (available: {available})")]
    UnknownReport { name: String, available: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad category of a [`ReportError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Read,
    Value,
    UnknownReport,
    Configuration,
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::FileNotFound { .. } => ErrorKind::FileNotFound,
            ReportError::Read { .. } => ErrorKind::Read,
            ReportError::MissingField { .. }
            | ReportError::InvalidValue { .. }
            | ReportError::ValueOutOfRange { .. }
            | ReportError::SumOverflow { .. } => ErrorKind::Value,
            ReportError::UnknownReport { .. } => ErrorKind::UnknownReport,
            ReportError::Configuration(_) | ReportError::Io(_) => ErrorKind::Configuration,
        }
    }

    /// Path of the input file this error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ReportError::FileNotFound { path } | ReportError::Read { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        ReportError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for ReportError {
    fn from(err: toml::ser::Error) -> Self {
        ReportError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
