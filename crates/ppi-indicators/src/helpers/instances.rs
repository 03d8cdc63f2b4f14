//! Activity-instance accessors.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use ppi_model::{LifecyclePhase, StandardColumn};
use ppi_transform::EventLog;

use super::require_column;
use crate::error::{IndicatorError, Result};

/// Row positions of the events of one activity instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstanceRows {
    pub start: Option<usize>,
    pub complete: Option<usize>,
}

impl InstanceRows {
    /// The row that stands for the instance: the COMPLETE event when there
    /// is one, the START event otherwise.
    pub fn representative(&self) -> Option<usize> {
        self.complete.or(self.start)
    }

    fn record(&mut self, phase: LifecyclePhase, row: usize) {
        match phase {
            LifecyclePhase::Start => self.start = Some(row),
            LifecyclePhase::Complete => self.complete = Some(row),
        }
    }
}

/// Rows of `instance_id`.
pub fn rows(log: &EventLog, instance_id: &str) -> Result<InstanceRows> {
    let mut rows = InstanceRows::default();
    for (row, event) in log.events().iter().enumerate() {
        if event.instance_id == instance_id {
            rows.record(event.phase, row);
        }
    }
    if rows.representative().is_none() {
        return Err(IndicatorError::InstanceIdNotFound {
            instance_id: instance_id.to_string(),
        });
    }
    Ok(rows)
}

/// Rows of every instance in `case_id`, keyed by instance id.
pub(crate) fn case_instance_rows<'a>(
    log: &'a EventLog,
    case_id: &str,
) -> BTreeMap<&'a str, InstanceRows> {
    let mut by_instance: BTreeMap<&str, InstanceRows> = BTreeMap::new();
    for (row, event) in log.events().iter().enumerate() {
        if event.case_id == case_id {
            by_instance
                .entry(event.instance_id.as_str())
                .or_default()
                .record(event.phase, row);
        }
    }
    by_instance
}

/// The COMPLETE event row, if the instance has one.
pub fn cpl(log: &EventLog, instance_id: &str) -> Result<Option<usize>> {
    Ok(rows(log, instance_id)?.complete)
}

/// The START event row, falling back to the COMPLETE row for instances
/// recorded without a START.
pub fn start(log: &EventLog, instance_id: &str) -> Result<usize> {
    let rows = rows(log, instance_id)?;
    rows.start
        .or(rows.complete)
        .ok_or_else(|| IndicatorError::InstanceIdNotFound {
            instance_id: instance_id.to_string(),
        })
}

pub fn stime(log: &EventLog, instance_id: &str) -> Result<DateTime<Utc>> {
    let row = start(log, instance_id)?;
    Ok(log.events()[row].timestamp)
}

pub fn ctime(log: &EventLog, instance_id: &str) -> Result<DateTime<Utc>> {
    match cpl(log, instance_id)? {
        Some(row) => Ok(log.events()[row].timestamp),
        None => Err(IndicatorError::IncompleteInstance {
            instance_id: instance_id.to_string(),
        }),
    }
}

pub fn case<'a>(log: &'a EventLog, instance_id: &str) -> Result<&'a str> {
    let row = representative_row(log, instance_id)?;
    Ok(log.events()[row].case_id.as_str())
}

pub fn act<'a>(log: &'a EventLog, instance_id: &str) -> Result<&'a str> {
    let row = representative_row(log, instance_id)?;
    Ok(log.events()[row].activity.as_str())
}

/// Resource of the instance, `None` when the cell is empty.
pub fn res(log: &EventLog, instance_id: &str) -> Result<Option<String>> {
    attribute(log, instance_id, StandardColumn::Resource)
}

pub fn hres(log: &EventLog, instance_id: &str) -> Result<Option<String>> {
    attribute(log, instance_id, StandardColumn::HumanResource)
}

pub fn role(log: &EventLog, instance_id: &str) -> Result<Option<String>> {
    attribute(log, instance_id, StandardColumn::Role)
}

/// Instances of the same case that completed last before this one started.
///
/// Instances without a COMPLETE event never precede anything.
pub fn prev_instances(log: &EventLog, instance_id: &str) -> Result<BTreeSet<String>> {
    let start_time = stime(log, instance_id)?;
    let case_id = case(log, instance_id)?;
    let events = log.events();

    let completed_before: Vec<(&str, DateTime<Utc>)> = case_instance_rows(log, case_id)
        .into_iter()
        .filter(|(other, _)| *other != instance_id)
        .filter_map(|(other, rows)| rows.complete.map(|row| (other, events[row].timestamp)))
        .filter(|(_, completed)| *completed < start_time)
        .collect();

    let Some(latest) = completed_before.iter().map(|(_, t)| *t).max() else {
        return Ok(BTreeSet::new());
    };
    Ok(completed_before
        .into_iter()
        .filter(|(_, t)| *t == latest)
        .map(|(id, _)| id.to_string())
        .collect())
}

/// Instances of the same case that started first after this one completed.
pub fn next_instances(log: &EventLog, instance_id: &str) -> Result<BTreeSet<String>> {
    let complete_time = ctime(log, instance_id)?;
    let case_id = case(log, instance_id)?;
    let events = log.events();

    let started_after: Vec<(&str, DateTime<Utc>)> = case_instance_rows(log, case_id)
        .into_iter()
        .filter(|(other, _)| *other != instance_id)
        .filter_map(|(other, rows)| {
            rows.start
                .or(rows.complete)
                .map(|row| (other, events[row].timestamp))
        })
        .filter(|(_, started)| *started > complete_time)
        .collect();

    let Some(earliest) = started_after.iter().map(|(_, t)| *t).min() else {
        return Ok(BTreeSet::new());
    };
    Ok(started_after
        .into_iter()
        .filter(|(_, t)| *t == earliest)
        .map(|(id, _)| id.to_string())
        .collect())
}

/// Instances of the same case that started before this one and were still
/// running when it started.
pub fn prevstr(log: &EventLog, instance_id: &str) -> Result<BTreeSet<String>> {
    let start_time = stime(log, instance_id)?;
    let case_id = case(log, instance_id)?;
    let events = log.events();

    Ok(case_instance_rows(log, case_id)
        .into_iter()
        .filter(|(other, _)| *other != instance_id)
        .filter(|(_, rows)| {
            let started = rows.start.or(rows.complete).map(|row| events[row].timestamp);
            let completed = rows.complete.map(|row| events[row].timestamp);
            matches!(
                (started, completed),
                (Some(s), Some(c)) if s < start_time && c > start_time
            )
        })
        .map(|(id, _)| id.to_string())
        .collect())
}

/// Instances of the same case that started at the same instant.
pub fn concstr(log: &EventLog, instance_id: &str) -> Result<BTreeSet<String>> {
    let start_time = stime(log, instance_id)?;
    let case_id = case(log, instance_id)?;
    let events = log.events();

    Ok(case_instance_rows(log, case_id)
        .into_iter()
        .filter(|(other, _)| *other != instance_id)
        .filter(|(_, rows)| {
            rows.start
                .or(rows.complete)
                .is_some_and(|row| events[row].timestamp == start_time)
        })
        .map(|(id, _)| id.to_string())
        .collect())
}

fn representative_row(log: &EventLog, instance_id: &str) -> Result<usize> {
    rows(log, instance_id)?
        .representative()
        .ok_or_else(|| IndicatorError::InstanceIdNotFound {
            instance_id: instance_id.to_string(),
        })
}

fn attribute(log: &EventLog, instance_id: &str, column: StandardColumn) -> Result<Option<String>> {
    let row = representative_row(log, instance_id)?;
    require_column(log, column)?;
    Ok(log.text(row, column))
}
