//! Quality indicators per case.

use std::collections::BTreeSet;

use ppi_transform::EventLog;

use crate::error::Result;
use crate::helpers::{cases, instances};

/// Instances of the case carried out by `human_resource`.
pub fn activity_instance_count_by_human_resource(
    log: &EventLog,
    case_id: &str,
    human_resource: &str,
) -> Result<usize> {
    let mut count = 0;
    for instance_id in cases::inst(log, case_id)? {
        if instances::hres(log, &instance_id)?.as_deref() == Some(human_resource) {
            count += 1;
        }
    }
    Ok(count)
}

/// Instances of the case carried out by someone in `role`.
pub fn activity_instance_count_by_role(log: &EventLog, case_id: &str, role: &str) -> Result<usize> {
    let mut count = 0;
    for instance_id in cases::inst(log, case_id)? {
        if instances::role(log, &instance_id)?.as_deref() == Some(role) {
            count += 1;
        }
    }
    Ok(count)
}

pub fn automated_activity_count(
    log: &EventLog,
    case_id: &str,
    automated_activities: &BTreeSet<String>,
) -> Result<usize> {
    Ok(cases::act(log, case_id)?
        .intersection(automated_activities)
        .count())
}
