use thiserror::Error;

use crate::columns::StandardColumn;

/// Errors raised while validating a column mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A mapping key is not one of the canonical column names.
    #[error("'{name}' is not a standard column name; expected one of: {expected}")]
    UnknownColumn { name: String, expected: String },

    /// A mandatory slot (case id, activity, timestamp) was not provided.
    #[error("missing required mapping field '{field}' for column '{column}'")]
    MissingRequiredField {
        field: &'static str,
        column: StandardColumn,
    },

    /// A mapped source column does not exist in the event log.
    #[error(
        "column '{source_column}' mapped to '{column}' is not present in the event log; available columns: {available}"
    )]
    MissingSourceColumn {
        column: StandardColumn,
        source_column: String,
        available: String,
    },

    /// Two canonical columns point at the same source column.
    #[error("column '{source_column}' is mapped to both '{first}' and '{second}'")]
    DuplicateSourceColumn {
        source_column: String,
        first: StandardColumn,
        second: StandardColumn,
    },
}

pub type Result<T> = std::result::Result<T, MappingError>;
