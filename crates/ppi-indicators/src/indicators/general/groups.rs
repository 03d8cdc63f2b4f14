//! General indicators over a group of cases.

use std::collections::BTreeSet;

use ppi_transform::EventLog;

use crate::division::safe_division;
use crate::error::{IndicatorError, Result};
use crate::helpers::cases;

pub(crate) fn ensure_case_ids(case_ids: &[String]) -> Result<()> {
    if case_ids.is_empty() {
        Err(IndicatorError::EmptyCaseIds)
    } else {
        Ok(())
    }
}

/// Number of distinct group cases present in the log.
pub fn case_count(log: &EventLog, case_ids: &[String]) -> Result<usize> {
    ensure_case_ids(case_ids)?;
    let known: BTreeSet<&str> = log.case_ids().into_iter().collect();
    let requested: BTreeSet<&str> = case_ids.iter().map(String::as_str).collect();
    Ok(requested.intersection(&known).count())
}

/// Sum over the group of the distinct activities of each case.
pub fn activity_count(log: &EventLog, case_ids: &[String]) -> Result<usize> {
    sum_over_cases(case_ids, |case_id| Ok(cases::act(log, case_id)?.len()))
}

pub fn expected_activity_count(log: &EventLog, case_ids: &[String]) -> Result<f64> {
    per_case(log, case_ids, activity_count(log, case_ids)?)
}

pub fn activity_instance_count(log: &EventLog, case_ids: &[String]) -> Result<usize> {
    sum_over_cases(case_ids, |case_id| Ok(cases::inst(log, case_id)?.len()))
}

pub fn expected_activity_instance_count(log: &EventLog, case_ids: &[String]) -> Result<f64> {
    per_case(log, case_ids, activity_instance_count(log, case_ids)?)
}

pub fn human_resource_count(log: &EventLog, case_ids: &[String]) -> Result<usize> {
    sum_over_cases(case_ids, |case_id| Ok(cases::hres(log, case_id)?.len()))
}

pub fn expected_human_resource_count(log: &EventLog, case_ids: &[String]) -> Result<f64> {
    per_case(log, case_ids, human_resource_count(log, case_ids)?)
}

pub fn resource_count(log: &EventLog, case_ids: &[String]) -> Result<usize> {
    sum_over_cases(case_ids, |case_id| Ok(cases::res(log, case_id)?.len()))
}

pub fn expected_resource_count(log: &EventLog, case_ids: &[String]) -> Result<f64> {
    per_case(log, case_ids, resource_count(log, case_ids)?)
}

pub fn role_count(log: &EventLog, case_ids: &[String]) -> Result<usize> {
    sum_over_cases(case_ids, |case_id| Ok(cases::role(log, case_id)?.len()))
}

pub fn expected_role_count(log: &EventLog, case_ids: &[String]) -> Result<f64> {
    per_case(log, case_ids, role_count(log, case_ids)?)
}

fn sum_over_cases<F>(case_ids: &[String], mut count: F) -> Result<usize>
where
    F: FnMut(&str) -> Result<usize>,
{
    ensure_case_ids(case_ids)?;
    let mut total = 0;
    for case_id in case_ids {
        total += count(case_id)?;
    }
    Ok(total)
}

fn per_case(log: &EventLog, case_ids: &[String], total: usize) -> Result<f64> {
    safe_division(total as f64, case_count(log, case_ids)? as f64)
}
