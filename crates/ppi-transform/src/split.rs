//! Event splitting.
//!
//! Turns the rows of a standardized table into lifecycle events. Atomic and
//! production-style rows each become one START and one COMPLETE event; interval
//! logs already carry one event per row. Every event remembers the table row
//! it came from so passthrough columns can follow it.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use polars::prelude::*;
use ppi_model::{FormatOptions, LifecyclePhase, LogShape, StandardColumn};

use crate::columns::first_null_row;
use crate::data_utils::column_strings;
use crate::datetime::parse_timestamp_column;
use crate::error::{Result, TransformError};

/// One lifecycle event derived from a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitEvent {
    /// Row of the standardized table this event was read from.
    pub source_row: usize,
    pub case_id: String,
    pub activity: String,
    pub timestamp: DateTime<Utc>,
    pub phase: LifecyclePhase,
    /// Present only when the log carries instance ids.
    pub instance_id: Option<String>,
}

/// Split a standardized table into lifecycle events, sorted by case and time.
pub fn split_events(
    table: &DataFrame,
    shape: LogShape,
    options: &FormatOptions,
) -> Result<Vec<SplitEvent>> {
    let case_ids = required_strings(table, StandardColumn::CaseId)?;
    let activities = required_strings(table, StandardColumn::Activity)?;
    let timestamps = parse_timestamp_column(table, StandardColumn::Timestamp, options)?;

    let rows = table.height();
    let event = |row: usize,
                 timestamp: DateTime<Utc>,
                 phase: LifecyclePhase,
                 instance_id: Option<String>| SplitEvent {
        source_row: row,
        case_id: case_ids[row].clone(),
        activity: activities[row].clone(),
        timestamp,
        phase,
        instance_id,
    };

    let mut events = Vec::with_capacity(if shape.needs_splitting() { rows * 2 } else { rows });
    match shape {
        LogShape::Atomic => {
            for (row, ts) in timestamps.iter().enumerate() {
                events.push(event(row, *ts, LifecyclePhase::Start, None));
            }
            for (row, ts) in timestamps.iter().enumerate() {
                events.push(event(row, *ts, LifecyclePhase::Complete, None));
            }
        }
        LogShape::ProductionStyle => {
            let starts =
                parse_timestamp_column(table, StandardColumn::StartTimestamp, options)?;
            for (row, ts) in starts.iter().enumerate() {
                events.push(event(row, *ts, LifecyclePhase::Start, None));
            }
            for (row, ts) in timestamps.iter().enumerate() {
                events.push(event(row, *ts, LifecyclePhase::Complete, None));
            }
        }
        LogShape::DerivableInterval | LogShape::ExplicitInterval => {
            let phases = parse_phases(table)?;
            let instances = if shape == LogShape::ExplicitInterval {
                Some(required_strings(table, StandardColumn::Instance)?)
            } else {
                None
            };
            for (row, (ts, phase)) in timestamps.iter().zip(phases).enumerate() {
                let instance_id = instances.as_ref().map(|ids| ids[row].clone());
                events.push(event(row, *ts, phase, instance_id));
            }
        }
    }

    sort_events(&mut events);
    tracing::debug!(shape = %shape, rows, events = events.len(), "split events");
    Ok(events)
}

/// Sort by case, then timestamp. Ties put START before COMPLETE and then keep
/// table order.
pub fn sort_events(events: &mut [SplitEvent]) {
    events.sort_by(compare_events);
}

fn compare_events(a: &SplitEvent, b: &SplitEvent) -> Ordering {
    a.case_id
        .cmp(&b.case_id)
        .then(a.timestamp.cmp(&b.timestamp))
        .then(a.phase.cmp(&b.phase))
        .then(a.source_row.cmp(&b.source_row))
}

fn required_strings(table: &DataFrame, column: StandardColumn) -> Result<Vec<String>> {
    if let Some(row) = first_null_row(table, column)? {
        return Err(TransformError::MissingValue { column, row });
    }
    Ok(column_strings(table, column.as_str())?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

fn parse_phases(table: &DataFrame) -> Result<Vec<LifecyclePhase>> {
    column_strings(table, StandardColumn::LifecycleTransition.as_str())?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.unwrap_or_default();
            value
                .parse::<LifecyclePhase>()
                .map_err(|_| TransformError::LifecyclePhase { row, value })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppi_model::ColumnMapping;

    use crate::columns::standardize_columns;

    fn standardized(columns: Vec<Column>, mapping: &ColumnMapping) -> DataFrame {
        standardize_columns(&DataFrame::new(columns).unwrap(), mapping).unwrap()
    }

    #[test]
    fn test_atomic_rows_double() {
        let mapping = ColumnMapping::new("case", "activity", "ts");
        let table = standardized(
            vec![
                Series::new("case".into(), vec!["1", "1"]).into(),
                Series::new("activity".into(), vec!["A", "B"]).into(),
                Series::new("ts".into(), vec!["2024-01-01 10:00", "2024-01-01 11:00"]).into(),
            ],
            &mapping,
        );
        let events = split_events(&table, LogShape::Atomic, &FormatOptions::default()).unwrap();

        assert_eq!(events.len(), 4);
        let summary: Vec<(&str, LifecyclePhase, usize)> = events
            .iter()
            .map(|e| (e.activity.as_str(), e.phase, e.source_row))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("A", LifecyclePhase::Start, 0),
                ("A", LifecyclePhase::Complete, 0),
                ("B", LifecyclePhase::Start, 1),
                ("B", LifecyclePhase::Complete, 1),
            ]
        );
        assert_eq!(events[0].timestamp, events[1].timestamp);
    }

    #[test]
    fn test_production_style_uses_both_timestamps() {
        let mapping = ColumnMapping::new("case", "activity", "end")
            .with_column(StandardColumn::StartTimestamp, "start");
        let table = standardized(
            vec![
                Series::new("case".into(), vec!["1"]).into(),
                Series::new("activity".into(), vec!["Turning"]).into(),
                Series::new("start".into(), vec!["2024-01-01 08:00"]).into(),
                Series::new("end".into(), vec!["2024-01-01 09:00"]).into(),
            ],
            &mapping,
        );
        let events =
            split_events(&table, LogShape::ProductionStyle, &FormatOptions::default()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].phase, LifecyclePhase::Start);
        assert_eq!(events[0].timestamp.to_rfc3339(), "2024-01-01T08:00:00+00:00");
        assert_eq!(events[1].phase, LifecyclePhase::Complete);
        assert_eq!(events[1].timestamp.to_rfc3339(), "2024-01-01T09:00:00+00:00");
    }

    #[test]
    fn test_sorted_by_case_then_time() {
        let mapping = ColumnMapping::new("case", "activity", "ts")
            .with_column(StandardColumn::LifecycleTransition, "lifecycle");
        let table = standardized(
            vec![
                Series::new("case".into(), vec!["2", "1", "1"]).into(),
                Series::new("activity".into(), vec!["A", "A", "A"]).into(),
                Series::new("ts".into(), vec!["2024-01-01", "2024-01-03", "2024-01-02"]).into(),
                Series::new("lifecycle".into(), vec!["start", "complete", "START"]).into(),
            ],
            &mapping,
        );
        let events =
            split_events(&table, LogShape::DerivableInterval, &FormatOptions::default()).unwrap();

        let rows: Vec<usize> = events.iter().map(|e| e.source_row).collect();
        assert_eq!(rows, vec![2, 1, 0]);
    }

    #[test]
    fn test_unknown_lifecycle_value() {
        let mapping = ColumnMapping::new("case", "activity", "ts")
            .with_column(StandardColumn::LifecycleTransition, "lifecycle");
        let table = standardized(
            vec![
                Series::new("case".into(), vec!["1", "1"]).into(),
                Series::new("activity".into(), vec!["A", "A"]).into(),
                Series::new("ts".into(), vec!["2024-01-01", "2024-01-02"]).into(),
                Series::new("lifecycle".into(), vec!["start", "suspend"]).into(),
            ],
            &mapping,
        );
        let err = split_events(&table, LogShape::DerivableInterval, &FormatOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            TransformError::LifecyclePhase { row: 1, ref value } if value == "suspend"
        ));
    }
}
