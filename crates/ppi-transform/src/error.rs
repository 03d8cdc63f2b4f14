//! Error types for event log transformation.

use std::path::PathBuf;

use ppi_model::{MappingError, StandardColumn};
use thiserror::Error;

/// Errors raised while turning a raw table into a canonical event log.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The column mapping does not fit the table.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// A timestamp value could not be parsed.
    #[error("cannot parse '{value}' in column '{column}' at row {row} as a timestamp")]
    Timestamp {
        column: StandardColumn,
        row: usize,
        value: String,
    },

    /// A lifecycle value is neither `start` nor `complete`.
    #[error("unsupported lifecycle transition '{value}' at row {row}; expected 'start' or 'complete'")]
    LifecyclePhase { row: usize, value: String },

    /// A required column holds a null.
    #[error("column '{column}' has a missing value at row {row}")]
    MissingValue { column: StandardColumn, row: usize },

    /// An activity instance has two events with the same lifecycle phase.
    #[error("case '{case_id}' instance '{instance_id}' has more than one {phase} event")]
    DuplicateInstanceEvent {
        case_id: String,
        instance_id: String,
        phase: ppi_model::LifecyclePhase,
    },

    /// An activity instance starts after it completes.
    #[error("case '{case_id}' instance '{instance_id}' starts after it completes")]
    InstanceOrder {
        case_id: String,
        instance_id: String,
    },

    /// An instance id is used by events of more than one case.
    #[error("instance '{instance_id}' appears in case '{first_case}' and in case '{second_case}'")]
    InstanceSpansCases {
        instance_id: String,
        first_case: String,
        second_case: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Failed to write an export file.
    #[error("failed to write {path}: {message}")]
    Export { path: PathBuf, message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("ts".into());
        let err: TransformError = polars_err.into();
        assert!(matches!(err, TransformError::DataFrame { .. }));
    }

    #[test]
    fn test_mapping_error_is_transparent() {
        let err: TransformError = MappingError::MissingRequiredField {
            field: "activity_key",
            column: StandardColumn::Activity,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "missing required mapping field 'activity_key' for column 'concept:name'"
        );
    }
}
