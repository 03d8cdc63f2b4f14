//! Cost indicators per activity, across all cases.

use ppi_model::StandardColumn;
use ppi_transform::EventLog;

use super::instances::instance_cost;
use crate::arguments::AggregationMode;
use crate::division::safe_division;
use crate::error::Result;
use crate::helpers::{activities, cases_activities, ensure_activity};

/// Sum of `column` over every instance of the activity. Instances without a
/// value count as zero.
pub fn activity_cost(
    log: &EventLog,
    activity: &str,
    column: StandardColumn,
    mode: AggregationMode,
) -> Result<f64> {
    let mut total = 0.0;
    for instance_id in activities::inst(log, activity)? {
        total += instance_cost(log, &instance_id, column, mode)?.unwrap_or(0.0);
    }
    Ok(total)
}

pub fn human_resource_count(log: &EventLog, activity: &str) -> Result<usize> {
    Ok(activities::hres(log, activity)?.len())
}

pub fn resource_count(log: &EventLog, activity: &str) -> Result<usize> {
    Ok(activities::res(log, activity)?.len())
}

pub fn labor_cost_and_total_cost_ratio(
    log: &EventLog,
    activity: &str,
    mode: AggregationMode,
) -> Result<f64> {
    safe_division(
        activity_cost(log, activity, StandardColumn::LaborCost, mode)?,
        activity_cost(log, activity, StandardColumn::TotalCost, mode)?,
    )
}

/// Repeated instantiations of the activity: for each case, every instance
/// after the first.
pub fn rework_count(log: &EventLog, activity: &str) -> Result<usize> {
    ensure_activity(log, activity)?;
    let mut count = 0;
    for case_id in log.case_ids() {
        count += cases_activities::count(log, case_id, activity)?.saturating_sub(1);
    }
    Ok(count)
}
