//! Canonical table assembly and explicit-log integrity checks.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use polars::prelude::*;
use ppi_model::{LifecyclePhase, LogShape, StandardColumn};

use crate::error::{Result, TransformError};
use crate::split::SplitEvent;

/// Columns built from events rather than copied from the source table.
const STRUCTURAL_COLUMNS: [StandardColumn; 5] = [
    StandardColumn::CaseId,
    StandardColumn::Activity,
    StandardColumn::Timestamp,
    StandardColumn::LifecycleTransition,
    StandardColumn::Instance,
];

/// Check that a log with given instance ids describes well-formed instances.
///
/// An instance id belongs to a single case. Each instance may have at most one
/// START and one COMPLETE, and the START must not be later than the COMPLETE.
pub fn validate_explicit_instances(events: &[SplitEvent]) -> Result<()> {
    type Bounds = (Option<DateTime<Utc>>, Option<DateTime<Utc>>);
    let mut instances: BTreeMap<(&str, &str), Bounds> = BTreeMap::new();
    let mut owners: BTreeMap<&str, &str> = BTreeMap::new();

    for event in events {
        let Some(instance_id) = event.instance_id.as_deref() else {
            return Err(TransformError::MissingValue {
                column: StandardColumn::Instance,
                row: event.source_row,
            });
        };
        let owner = *owners.entry(instance_id).or_insert(event.case_id.as_str());
        if owner != event.case_id {
            return Err(TransformError::InstanceSpansCases {
                instance_id: instance_id.to_string(),
                first_case: owner.to_string(),
                second_case: event.case_id.clone(),
            });
        }
        let (start, complete) = instances
            .entry((event.case_id.as_str(), instance_id))
            .or_default();
        let slot = match event.phase {
            LifecyclePhase::Start => start,
            LifecyclePhase::Complete => complete,
        };
        if slot.is_some() {
            return Err(TransformError::DuplicateInstanceEvent {
                case_id: event.case_id.clone(),
                instance_id: instance_id.to_string(),
                phase: event.phase,
            });
        }
        *slot = Some(event.timestamp);
    }

    for ((case_id, instance_id), bounds) in &instances {
        if let (Some(start), Some(complete)) = bounds
            && start > complete
        {
            return Err(TransformError::InstanceOrder {
                case_id: (*case_id).to_string(),
                instance_id: (*instance_id).to_string(),
            });
        }
    }
    Ok(())
}

/// Build the canonical table from sorted events and their instance ids.
///
/// Structural columns come first, then every other standardized column in
/// canonical order, with values taken from each event's source row. The start
/// timestamp of a production-style log has been folded into the START events
/// and is not carried over.
pub fn build_canonical_frame(
    standardized: &DataFrame,
    shape: LogShape,
    events: &[SplitEvent],
    instance_ids: &[String],
) -> Result<DataFrame> {
    let case_ids: Vec<&str> = events.iter().map(|e| e.case_id.as_str()).collect();
    let activities: Vec<&str> = events.iter().map(|e| e.activity.as_str()).collect();
    let millis: Vec<i64> = events.iter().map(|e| e.timestamp.timestamp_millis()).collect();
    let phases: Vec<&str> = events.iter().map(|e| e.phase.as_str()).collect();
    let instances: Vec<&str> = instance_ids.iter().map(String::as_str).collect();

    let timestamps = Int64Chunked::from_vec(StandardColumn::Timestamp.as_str().into(), millis)
        .into_datetime(TimeUnit::Milliseconds, Some(TimeZone::UTC))
        .into_series();

    let mut columns: Vec<Column> = vec![
        Series::new(StandardColumn::CaseId.as_str().into(), case_ids).into(),
        Series::new(StandardColumn::Activity.as_str().into(), activities).into(),
        timestamps.into(),
        Series::new(StandardColumn::LifecycleTransition.as_str().into(), phases).into(),
        Series::new(StandardColumn::Instance.as_str().into(), instances).into(),
    ];

    let passthrough = passthrough_columns(standardized, shape);
    if !passthrough.is_empty() {
        let rows = IdxCa::from_vec(
            "row".into(),
            events.iter().map(|e| e.source_row as IdxSize).collect(),
        );
        let taken = standardized
            .select(passthrough.iter().map(String::as_str))?
            .take(&rows)?;
        columns.extend(taken.get_columns().iter().cloned());
    }

    Ok(DataFrame::new(columns)?)
}

fn passthrough_columns(standardized: &DataFrame, shape: LogShape) -> Vec<String> {
    standardized
        .get_column_names()
        .iter()
        .filter_map(|name| name.parse::<StandardColumn>().ok())
        .filter(|column| !STRUCTURAL_COLUMNS.contains(column))
        .filter(|column| {
            !(shape == LogShape::ProductionStyle && *column == StandardColumn::StartTimestamp)
        })
        .map(|column| column.as_str().to_string())
        .collect()
}
