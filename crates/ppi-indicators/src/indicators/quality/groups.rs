//! Quality indicators over a group of cases.

use ppi_transform::EventLog;

use super::cases;
use crate::division::safe_division;
use crate::error::Result;
use crate::indicators::general::groups::{activity_instance_count, ensure_case_ids};

pub fn activity_instance_count_by_human_resource(
    log: &EventLog,
    case_ids: &[String],
    human_resource: &str,
) -> Result<usize> {
    ensure_case_ids(case_ids)?;
    case_ids
        .iter()
        .map(|case_id| cases::activity_instance_count_by_human_resource(log, case_id, human_resource))
        .sum()
}

/// Share of the group's instances carried out by `human_resource`.
pub fn expected_activity_instance_count_by_human_resource(
    log: &EventLog,
    case_ids: &[String],
    human_resource: &str,
) -> Result<f64> {
    safe_division(
        activity_instance_count_by_human_resource(log, case_ids, human_resource)? as f64,
        activity_instance_count(log, case_ids)? as f64,
    )
}

pub fn activity_instance_count_by_role(
    log: &EventLog,
    case_ids: &[String],
    role: &str,
) -> Result<usize> {
    ensure_case_ids(case_ids)?;
    case_ids
        .iter()
        .map(|case_id| cases::activity_instance_count_by_role(log, case_id, role))
        .sum()
}

pub fn expected_activity_instance_count_by_role(
    log: &EventLog,
    case_ids: &[String],
    role: &str,
) -> Result<f64> {
    safe_division(
        activity_instance_count_by_role(log, case_ids, role)? as f64,
        activity_instance_count(log, case_ids)? as f64,
    )
}
