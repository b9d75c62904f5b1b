//! Error types for measurement data loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading measurement exports.
///
/// Loading degrades rather than aborts: these errors travel inside
/// [`crate::loader::LoadStatus::Failed`] as diagnostics and never cross
/// the public loading API as an `Err`.
#[derive(Debug, Clone, Error)]
pub enum IngestError {
    /// No candidate directory contained the export.
    #[error("data file '{filename}' not found (searched {searched:?})")]
    FileNotFound {
        filename: String,
        searched: Vec<PathBuf>,
    },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Export lacks the mandatory timestamp column.
    #[error("required column 'Timestamp' not found in {path}")]
    MissingTimestamp { path: PathBuf },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
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
        let err = IngestError::MissingTimestamp {
            path: PathBuf::from("/data/benin_clean.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'Timestamp' not found in /data/benin_clean.csv"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("GHI".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
