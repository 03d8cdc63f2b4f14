//! Error types for indicator computation.

use std::path::PathBuf;

use ppi_model::StandardColumn;
use thiserror::Error;

use crate::registry::Param;

/// Errors raised by accessor helpers, indicators, and the runner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("case id '{case_id}' not found in event log")]
    CaseIdNotFound { case_id: String },

    #[error("activity name '{activity}' not found in event log")]
    ActivityNameNotFound { activity: String },

    #[error("instance id '{instance_id}' not found in event log")]
    InstanceIdNotFound { instance_id: String },

    /// An optional column the indicator reads is absent from the log.
    #[error("column '{column}' not found in event log; available columns: {available}")]
    ColumnNotFound {
        column: StandardColumn,
        available: String,
    },

    #[error("error performing indicator division: numerator={numerator}, denominator={denominator}")]
    Division { numerator: f64, denominator: f64 },

    #[error("indicator '{indicator}' is not implemented")]
    NotImplemented { indicator: &'static str },

    #[error("missing required argument '{param}'")]
    MissingArgument { param: Param },

    #[error("invalid indicator arguments: {message}")]
    InvalidArguments { message: String },

    #[error("no start event found for case '{case_id}'")]
    NoStartEvent { case_id: String },

    #[error("no complete event found for case '{case_id}'")]
    NoCompleteEvent { case_id: String },

    /// The instance has a START event but no COMPLETE event.
    #[error("instance '{instance_id}' has no complete event")]
    IncompleteInstance { instance_id: String },

    /// A cost or value column holds no usable value where one is required.
    #[error("no '{column}' value for '{key}'")]
    MissingValue { column: StandardColumn, key: String },

    #[error("case_ids is empty; provide at least one case id")]
    EmptyCaseIds,

    /// Unknown dimension or granularity in a selection filter.
    #[error("unknown {kind}(s): {unknown}; allowed: {allowed}")]
    UnknownSelection {
        kind: &'static str,
        unknown: String,
        allowed: String,
    },

    #[error("failed to write {path}: {message}")]
    Export { path: PathBuf, message: String },
}

/// Result type for indicator operations.
pub type Result<T> = std::result::Result<T, IndicatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_lists_available() {
        let err = IndicatorError::ColumnNotFound {
            column: StandardColumn::Role,
            available: "case:concept:name, concept:name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'org:role' not found in event log; available columns: case:concept:name, concept:name"
        );
    }

    #[test]
    fn test_division_message_shows_operands() {
        let err = IndicatorError::Division {
            numerator: 3.0,
            denominator: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "error performing indicator division: numerator=3, denominator=0"
        );
    }
}
