//! Activity accessors across all cases.

use std::collections::BTreeSet;

use ppi_model::StandardColumn;
use ppi_transform::EventLog;

use super::{distinct_text, ensure_activity};
use crate::error::Result;

/// Instances of `activity` in every case.
pub fn inst(log: &EventLog, activity: &str) -> Result<BTreeSet<String>> {
    ensure_activity(log, activity)?;
    Ok(log
        .events()
        .iter()
        .filter(|e| e.activity == activity)
        .map(|e| e.instance_id.clone())
        .collect())
}

pub fn res(log: &EventLog, activity: &str) -> Result<BTreeSet<String>> {
    ensure_activity(log, activity)?;
    distinct_text(log, activity_rows(log, activity), StandardColumn::Resource)
}

pub fn hres(log: &EventLog, activity: &str) -> Result<BTreeSet<String>> {
    ensure_activity(log, activity)?;
    distinct_text(log, activity_rows(log, activity), StandardColumn::HumanResource)
}

fn activity_rows<'a>(log: &'a EventLog, activity: &'a str) -> impl Iterator<Item = usize> + 'a {
    log.events()
        .iter()
        .enumerate()
        .filter(move |(_, e)| e.activity == activity)
        .map(|(row, _)| row)
}
