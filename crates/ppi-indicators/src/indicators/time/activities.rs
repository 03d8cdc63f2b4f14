//! Time indicators per activity, across all cases.

use chrono::TimeDelta;
use ppi_transform::EventLog;

use super::instances::service_time as instance_service_time;
use crate::error::Result;
use crate::helpers::activities;

/// Sum of the service times of every instance of the activity.
pub fn service_time(log: &EventLog, activity: &str) -> Result<TimeDelta> {
    let mut total = TimeDelta::zero();
    for instance_id in activities::inst(log, activity)? {
        total += instance_service_time(log, &instance_id)?;
    }
    Ok(total)
}
