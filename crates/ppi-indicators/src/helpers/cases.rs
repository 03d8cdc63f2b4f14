//! Case accessors.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use ppi_model::{LifecyclePhase, StandardColumn};
use ppi_transform::EventLog;

use super::{distinct_text, ensure_case};
use crate::error::{IndicatorError, Result};

/// Row positions of the events of `case_id`, in table order.
pub fn events(log: &EventLog, case_id: &str) -> Result<Vec<usize>> {
    ensure_case(log, case_id)?;
    Ok(case_rows(log, case_id).collect())
}

/// Activity names that occur in the case.
pub fn act(log: &EventLog, case_id: &str) -> Result<BTreeSet<String>> {
    ensure_case(log, case_id)?;
    let events = log.events();
    Ok(case_rows(log, case_id)
        .map(|row| events[row].activity.clone())
        .collect())
}

pub fn res(log: &EventLog, case_id: &str) -> Result<BTreeSet<String>> {
    ensure_case(log, case_id)?;
    distinct_text(log, case_rows(log, case_id), StandardColumn::Resource)
}

pub fn hres(log: &EventLog, case_id: &str) -> Result<BTreeSet<String>> {
    ensure_case(log, case_id)?;
    distinct_text(log, case_rows(log, case_id), StandardColumn::HumanResource)
}

pub fn role(log: &EventLog, case_id: &str) -> Result<BTreeSet<String>> {
    ensure_case(log, case_id)?;
    distinct_text(log, case_rows(log, case_id), StandardColumn::Role)
}

/// Activity-instance ids of the case.
pub fn inst(log: &EventLog, case_id: &str) -> Result<BTreeSet<String>> {
    ensure_case(log, case_id)?;
    let events = log.events();
    Ok(case_rows(log, case_id)
        .map(|row| events[row].instance_id.clone())
        .collect())
}

/// Instances whose START event is the earliest START of the case.
pub fn strin(log: &EventLog, case_id: &str) -> Result<BTreeSet<String>> {
    ensure_case(log, case_id)?;
    Ok(extreme_instances(log, case_id, LifecyclePhase::Start))
}

/// Instances whose COMPLETE event is the latest COMPLETE of the case.
pub fn endin(log: &EventLog, case_id: &str) -> Result<BTreeSet<String>> {
    ensure_case(log, case_id)?;
    Ok(extreme_instances(log, case_id, LifecyclePhase::Complete))
}

/// Timestamp of the earliest START event of the case.
pub fn startt(log: &EventLog, case_id: &str) -> Result<DateTime<Utc>> {
    ensure_case(log, case_id)?;
    phase_times(log, case_id, LifecyclePhase::Start)
        .min()
        .ok_or_else(|| IndicatorError::NoStartEvent {
            case_id: case_id.to_string(),
        })
}

/// Timestamp of the latest COMPLETE event of the case.
pub fn endt(log: &EventLog, case_id: &str) -> Result<DateTime<Utc>> {
    ensure_case(log, case_id)?;
    phase_times(log, case_id, LifecyclePhase::Complete)
        .max()
        .ok_or_else(|| IndicatorError::NoCompleteEvent {
            case_id: case_id.to_string(),
        })
}

fn case_rows<'a>(log: &'a EventLog, case_id: &'a str) -> impl Iterator<Item = usize> + 'a {
    log.events()
        .iter()
        .enumerate()
        .filter(move |(_, e)| e.case_id == case_id)
        .map(|(row, _)| row)
}

fn phase_times<'a>(
    log: &'a EventLog,
    case_id: &'a str,
    phase: LifecyclePhase,
) -> impl Iterator<Item = DateTime<Utc>> + 'a {
    log.events()
        .iter()
        .filter(move |e| e.case_id == case_id && e.phase == phase)
        .map(|e| e.timestamp)
}

fn extreme_instances(log: &EventLog, case_id: &str, phase: LifecyclePhase) -> BTreeSet<String> {
    let target = match phase {
        LifecyclePhase::Start => phase_times(log, case_id, phase).min(),
        LifecyclePhase::Complete => phase_times(log, case_id, phase).max(),
    };
    let Some(target) = target else {
        return BTreeSet::new();
    };
    log.events()
        .iter()
        .filter(|e| e.case_id == case_id && e.phase == phase && e.timestamp == target)
        .map(|e| e.instance_id.clone())
        .collect()
}
