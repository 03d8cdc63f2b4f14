//! Cost indicators per activity instance.

use ppi_model::StandardColumn;
use ppi_transform::EventLog;

use crate::arguments::AggregationMode;
use crate::division::safe_division;
use crate::error::{IndicatorError, Result};
use crate::helpers::{instances, require_column};

/// Cost recorded in `column` for one instance.
///
/// `Sgl` reads the COMPLETE event, or the START event when the instance has
/// no COMPLETE. `Sum` adds both and is `None` unless the instance has both
/// events with a value.
pub fn instance_cost(
    log: &EventLog,
    instance_id: &str,
    column: StandardColumn,
    mode: AggregationMode,
) -> Result<Option<f64>> {
    let rows = instances::rows(log, instance_id)?;
    require_column(log, column)?;
    Ok(match mode {
        AggregationMode::Sgl => rows.representative().and_then(|row| log.number(row, column)),
        AggregationMode::Sum => match (rows.start, rows.complete) {
            (Some(start), Some(complete)) => log
                .number(start, column)
                .zip(log.number(complete, column))
                .map(|(a, b)| a + b),
            _ => None,
        },
    })
}

/// Like [`instance_cost`], failing when no value is recorded.
pub fn required_instance_cost(
    log: &EventLog,
    instance_id: &str,
    column: StandardColumn,
    mode: AggregationMode,
) -> Result<f64> {
    instance_cost(log, instance_id, column, mode)?.ok_or_else(|| IndicatorError::MissingValue {
        column,
        key: instance_id.to_string(),
    })
}

pub fn labor_cost_and_total_cost_ratio(
    log: &EventLog,
    instance_id: &str,
    mode: AggregationMode,
) -> Result<f64> {
    let labor = required_instance_cost(log, instance_id, StandardColumn::LaborCost, mode)?;
    let total = required_instance_cost(log, instance_id, StandardColumn::TotalCost, mode)?;
    safe_division(labor, total)
}
