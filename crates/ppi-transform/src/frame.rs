//! The canonical event log.
//!
//! [`EventLog`] wraps the canonical Polars table together with a typed view of
//! its structural columns. It is only produced by formatting, so every value
//! obeys the canonical invariants: non-null identifiers, UTC timestamps, one
//! lifecycle phase per row, and instance ids on every row. There is no way to
//! mutate an `EventLog` once built.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use polars::prelude::*;
use ppi_model::{
    ColumnMapping, FormatOptions, LifecyclePhase, LogShape, MappingError, StandardColumn,
};

use crate::data_utils::{any_to_f64, any_to_string};
use crate::error::Result;
use crate::formatter::format_event_log_with;
use crate::ids::UuidIds;

/// One row of the canonical table, structural columns only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalEvent {
    pub case_id: String,
    pub activity: String,
    pub timestamp: DateTime<Utc>,
    pub phase: LifecyclePhase,
    pub instance_id: String,
}

/// A canonical explicit-interval event log.
#[derive(Debug, Clone)]
pub struct EventLog {
    data: DataFrame,
    events: Vec<CanonicalEvent>,
    source_shape: LogShape,
}

impl EventLog {
    pub(crate) fn new(data: DataFrame, events: Vec<CanonicalEvent>, source_shape: LogShape) -> Self {
        Self {
            data,
            events,
            source_shape,
        }
    }

    /// Rebuild an event log from a canonical table, such as one written by
    /// [`write_event_log_csv`](crate::write_event_log_csv) and read back.
    ///
    /// Columns that are not canonical are dropped. The table must carry
    /// lifecycle and instance columns.
    pub fn from_canonical_frame(data: &DataFrame) -> Result<Self> {
        let available: Vec<String> = data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        for column in [StandardColumn::LifecycleTransition, StandardColumn::Instance] {
            if !available.iter().any(|name| name == column.as_str()) {
                return Err(MappingError::MissingSourceColumn {
                    column,
                    source_column: column.as_str().to_string(),
                    available: available.join(", "),
                }
                .into());
            }
        }

        let mapping = ColumnMapping::from_standard_names(
            available
                .iter()
                .filter(|name| name.parse::<StandardColumn>().is_ok())
                .map(|name| (name.as_str(), name.as_str())),
        )?;
        format_event_log_with(data, &mapping, &FormatOptions::default(), &mut UuidIds)
    }

    /// The canonical table.
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn into_data(self) -> DataFrame {
        self.data
    }

    /// Structural values per row, in table order.
    pub fn events(&self) -> &[CanonicalEvent] {
        &self.events
    }

    /// Shape of the log this one was formatted from.
    pub fn source_shape(&self) -> LogShape {
        self.source_shape
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn has_column(&self, column: StandardColumn) -> bool {
        self.data.column(column.as_str()).is_ok()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Distinct case ids in first-seen order.
    pub fn case_ids(&self) -> Vec<&str> {
        distinct(self.events.iter().map(|e| e.case_id.as_str()))
    }

    /// Distinct activity names in first-seen order.
    pub fn activities(&self) -> Vec<&str> {
        distinct(self.events.iter().map(|e| e.activity.as_str()))
    }

    /// Raw cell value. `None` when the column is absent or the row is out of range.
    pub fn value(&self, row: usize, column: StandardColumn) -> Option<AnyValue<'_>> {
        self.data.column(column.as_str()).ok()?.get(row).ok()
    }

    /// Cell value as text, `None` for nulls and empty strings.
    pub fn text(&self, row: usize, column: StandardColumn) -> Option<String> {
        let text = any_to_string(self.value(row, column)?);
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Cell value as a number, `None` for nulls and non-numeric text.
    pub fn number(&self, row: usize, column: StandardColumn) -> Option<f64> {
        any_to_f64(self.value(row, column)?)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}
