//! Cost indicators per case.

use std::collections::BTreeSet;

use ppi_model::StandardColumn;
use ppi_transform::EventLog;

use super::instances::required_instance_cost;
use crate::arguments::AggregationMode;
use crate::division::safe_division;
use crate::error::Result;
use crate::helpers::{cases, ensure_case, instances, require_column};

/// Sum of `column` over every instance of the case. Any instance without a
/// value fails the whole case.
pub fn case_cost(
    log: &EventLog,
    case_id: &str,
    column: StandardColumn,
    mode: AggregationMode,
) -> Result<f64> {
    cases::inst(log, case_id)?
        .iter()
        .map(|instance_id| required_instance_cost(log, instance_id, column, mode))
        .sum()
}

/// Total cost of the case instances whose activity is in `activities`.
pub fn activity_subset_cost(
    log: &EventLog,
    case_id: &str,
    mode: AggregationMode,
    activities: &BTreeSet<String>,
) -> Result<f64> {
    let mut total = 0.0;
    for instance_id in cases::inst(log, case_id)? {
        if activities.contains(instances::act(log, &instance_id)?) {
            total += required_instance_cost(log, &instance_id, StandardColumn::TotalCost, mode)?;
        }
    }
    Ok(total)
}

pub fn automated_activity_cost(
    log: &EventLog,
    case_id: &str,
    mode: AggregationMode,
    automated_activities: &BTreeSet<String>,
) -> Result<f64> {
    activity_subset_cost(log, case_id, mode, automated_activities)
}

pub fn direct_cost(
    log: &EventLog,
    case_id: &str,
    mode: AggregationMode,
    direct_cost_activities: &BTreeSet<String>,
) -> Result<f64> {
    activity_subset_cost(log, case_id, mode, direct_cost_activities)
}

/// Number of desired activities that occur in the case.
pub fn desired_activity_count(
    log: &EventLog,
    case_id: &str,
    desired_activities: &BTreeSet<String>,
) -> Result<usize> {
    Ok(cases::act(log, case_id)?
        .intersection(desired_activities)
        .count())
}

/// The most recent non-null value of `column` in the case.
pub fn latest_case_value(log: &EventLog, case_id: &str, column: StandardColumn) -> Result<Option<f64>> {
    let rows = cases::events(log, case_id)?;
    require_column(log, column)?;
    let events = log.events();
    Ok(rows
        .into_iter()
        .filter_map(|row| log.number(row, column).map(|value| (events[row].timestamp, row, value)))
        .max_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)))
        .map(|(_, _, value)| value))
}

pub fn maintenance_cost(log: &EventLog, case_id: &str) -> Result<Option<f64>> {
    latest_case_value(log, case_id, StandardColumn::MaintenanceCost)
}

pub fn missed_deadline_cost(log: &EventLog, case_id: &str) -> Result<Option<f64>> {
    latest_case_value(log, case_id, StandardColumn::MissedDeadlineCost)
}

pub fn resource_count(log: &EventLog, case_id: &str) -> Result<usize> {
    Ok(cases::res(log, case_id)?.len())
}

pub fn labor_cost_and_total_cost_ratio(
    log: &EventLog,
    case_id: &str,
    mode: AggregationMode,
) -> Result<f64> {
    ensure_case(log, case_id)?;
    safe_division(
        case_cost(log, case_id, StandardColumn::LaborCost, mode)?,
        case_cost(log, case_id, StandardColumn::TotalCost, mode)?,
    )
}
