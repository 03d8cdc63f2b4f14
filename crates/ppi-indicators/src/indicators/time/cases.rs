//! Time indicators per case.

use std::collections::BTreeSet;

use chrono::TimeDelta;
use ppi_transform::EventLog;

use super::instances::service_time as instance_service_time;
use crate::division::safe_division;
use crate::error::Result;
use crate::helpers::{cases, instances};
use crate::value::duration_seconds;

/// Number of automated activities that occur in the case.
pub fn automated_activity_count(
    log: &EventLog,
    case_id: &str,
    automated_activities: &BTreeSet<String>,
) -> Result<usize> {
    Ok(cases::act(log, case_id)?
        .intersection(automated_activities)
        .count())
}

/// Number of case instances whose activity is automated.
pub fn automated_activity_instance_count(
    log: &EventLog,
    case_id: &str,
    automated_activities: &BTreeSet<String>,
) -> Result<usize> {
    let mut count = 0;
    for instance_id in cases::inst(log, case_id)? {
        if automated_activities.contains(instances::act(log, &instance_id)?) {
            count += 1;
        }
    }
    Ok(count)
}

/// Time from the first START to the last COMPLETE of the case.
pub fn lead_time(log: &EventLog, case_id: &str) -> Result<TimeDelta> {
    Ok(cases::endt(log, case_id)? - cases::startt(log, case_id)?)
}

/// `deadline` minus the lead time; negative when the case overran.
pub fn lead_time_deviation_from_deadline(
    log: &EventLog,
    case_id: &str,
    deadline: TimeDelta,
) -> Result<TimeDelta> {
    Ok(deadline - lead_time(log, case_id)?)
}

pub fn lead_time_deviation_from_expectation(
    log: &EventLog,
    case_id: &str,
    expectation: TimeDelta,
) -> Result<TimeDelta> {
    Ok(expectation - lead_time(log, case_id)?)
}

/// Sum of the service times of every instance in the case.
pub fn service_time(log: &EventLog, case_id: &str) -> Result<TimeDelta> {
    let mut total = TimeDelta::zero();
    for instance_id in cases::inst(log, case_id)? {
        total += instance_service_time(log, &instance_id)?;
    }
    Ok(total)
}

pub fn service_and_lead_time_ratio(log: &EventLog, case_id: &str) -> Result<f64> {
    safe_division(
        duration_seconds(service_time(log, case_id)?),
        duration_seconds(lead_time(log, case_id)?),
    )
}
