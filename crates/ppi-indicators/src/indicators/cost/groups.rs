//! Cost indicators over a group of cases.
//!
//! `expected_*` variants divide the group total by the number of group cases
//! present in the log.

use std::collections::BTreeSet;

use ppi_model::StandardColumn;
use ppi_transform::EventLog;

use super::cases;
use crate::arguments::AggregationMode;
use crate::division::safe_division;
use crate::error::{IndicatorError, Result};
use crate::indicators::general::groups::{case_count, ensure_case_ids};

pub fn group_cost(
    log: &EventLog,
    case_ids: &[String],
    column: StandardColumn,
    mode: AggregationMode,
) -> Result<f64> {
    ensure_case_ids(case_ids)?;
    case_ids
        .iter()
        .map(|case_id| cases::case_cost(log, case_id, column, mode))
        .sum()
}

pub fn expected_group_cost(
    log: &EventLog,
    case_ids: &[String],
    column: StandardColumn,
    mode: AggregationMode,
) -> Result<f64> {
    let total = group_cost(log, case_ids, column, mode)?;
    per_case(log, case_ids, total)
}

/// Sum of the latest `column` value of every case. A case without one fails
/// the group.
pub fn group_latest_value(log: &EventLog, case_ids: &[String], column: StandardColumn) -> Result<f64> {
    ensure_case_ids(case_ids)?;
    let mut total = 0.0;
    for case_id in case_ids {
        total += cases::latest_case_value(log, case_id, column)?.ok_or_else(|| {
            IndicatorError::MissingValue {
                column,
                key: case_id.clone(),
            }
        })?;
    }
    Ok(total)
}

pub fn expected_group_latest_value(
    log: &EventLog,
    case_ids: &[String],
    column: StandardColumn,
) -> Result<f64> {
    let total = group_latest_value(log, case_ids, column)?;
    per_case(log, case_ids, total)
}

pub fn resource_count(log: &EventLog, case_ids: &[String]) -> Result<usize> {
    ensure_case_ids(case_ids)?;
    case_ids
        .iter()
        .map(|case_id| cases::resource_count(log, case_id))
        .sum()
}

pub fn expected_resource_count(log: &EventLog, case_ids: &[String]) -> Result<f64> {
    let total = resource_count(log, case_ids)?;
    per_case(log, case_ids, total as f64)
}

pub fn labor_cost_and_total_cost_ratio(
    log: &EventLog,
    case_ids: &[String],
    mode: AggregationMode,
) -> Result<f64> {
    safe_division(
        group_cost(log, case_ids, StandardColumn::LaborCost, mode)?,
        group_cost(log, case_ids, StandardColumn::TotalCost, mode)?,
    )
}

pub fn automated_activity_cost(
    log: &EventLog,
    case_ids: &[String],
    mode: AggregationMode,
    automated_activities: &BTreeSet<String>,
) -> Result<f64> {
    ensure_case_ids(case_ids)?;
    case_ids
        .iter()
        .map(|case_id| cases::automated_activity_cost(log, case_id, mode, automated_activities))
        .sum()
}

pub fn expected_automated_activity_cost(
    log: &EventLog,
    case_ids: &[String],
    mode: AggregationMode,
    automated_activities: &BTreeSet<String>,
) -> Result<f64> {
    let total = automated_activity_cost(log, case_ids, mode, automated_activities)?;
    per_case(log, case_ids, total)
}

pub fn direct_cost(
    log: &EventLog,
    case_ids: &[String],
    mode: AggregationMode,
    direct_cost_activities: &BTreeSet<String>,
) -> Result<f64> {
    ensure_case_ids(case_ids)?;
    case_ids
        .iter()
        .map(|case_id| cases::direct_cost(log, case_id, mode, direct_cost_activities))
        .sum()
}

pub fn expected_direct_cost(
    log: &EventLog,
    case_ids: &[String],
    mode: AggregationMode,
    direct_cost_activities: &BTreeSet<String>,
) -> Result<f64> {
    let total = direct_cost(log, case_ids, mode, direct_cost_activities)?;
    per_case(log, case_ids, total)
}

pub fn desired_activity_count(
    log: &EventLog,
    case_ids: &[String],
    desired_activities: &BTreeSet<String>,
) -> Result<usize> {
    ensure_case_ids(case_ids)?;
    case_ids
        .iter()
        .map(|case_id| cases::desired_activity_count(log, case_id, desired_activities))
        .sum()
}

pub fn expected_desired_activity_count(
    log: &EventLog,
    case_ids: &[String],
    desired_activities: &BTreeSet<String>,
) -> Result<f64> {
    let total = desired_activity_count(log, case_ids, desired_activities)?;
    per_case(log, case_ids, total as f64)
}

fn per_case(log: &EventLog, case_ids: &[String], total: f64) -> Result<f64> {
    safe_division(total, case_count(log, case_ids)? as f64)
}
