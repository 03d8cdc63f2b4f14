//! Error types for event log ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading event logs and dataset configs.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV or config file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header or no data rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Config Errors ===
    /// Config file is not valid TOML or does not match the expected layout.
    #[error("invalid dataset config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config parsed but holds an unusable value.
    #[error("invalid dataset config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl IngestError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/log.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/log.csv");
    }

    #[test]
    fn test_io_not_found_maps_to_file_not_found() {
        let err = IngestError::io(
            std::path::Path::new("missing.csv"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
