//! Accessor helpers over a canonical event log.
//!
//! Each helper validates its key first and fails with a lookup error when the
//! key is absent from the log. Helpers that read an optional column fail with
//! [`IndicatorError::ColumnNotFound`] when the column was not mapped.

pub mod activities;
pub mod cases;
pub mod cases_activities;
pub mod instances;

use std::collections::BTreeSet;

use ppi_model::StandardColumn;
use ppi_transform::EventLog;

use crate::error::{IndicatorError, Result};

pub(crate) fn require_column(log: &EventLog, column: StandardColumn) -> Result<()> {
    if log.has_column(column) {
        Ok(())
    } else {
        Err(IndicatorError::ColumnNotFound {
            column,
            available: log.column_names().join(", "),
        })
    }
}

pub(crate) fn ensure_case(log: &EventLog, case_id: &str) -> Result<()> {
    if !case_id.is_empty() && log.events().iter().any(|e| e.case_id == case_id) {
        Ok(())
    } else {
        Err(IndicatorError::CaseIdNotFound {
            case_id: case_id.to_string(),
        })
    }
}

pub(crate) fn ensure_activity(log: &EventLog, activity: &str) -> Result<()> {
    if log.events().iter().any(|e| e.activity == activity) {
        Ok(())
    } else {
        Err(IndicatorError::ActivityNameNotFound {
            activity: activity.to_string(),
        })
    }
}

/// Distinct non-null text values of `column` over `rows`.
pub(crate) fn distinct_text(
    log: &EventLog,
    rows: impl IntoIterator<Item = usize>,
    column: StandardColumn,
) -> Result<BTreeSet<String>> {
    require_column(log, column)?;
    Ok(rows
        .into_iter()
        .filter_map(|row| log.text(row, column))
        .collect())
}
