//! Column standardization.
//!
//! Selects the mapped source columns, renames them to canonical wire names,
//! and coerces identifier columns to strings. Unmapped columns are dropped.

use polars::prelude::*;
use ppi_model::{ColumnMapping, MappingError, StandardColumn};

use crate::error::{Result, TransformError};

/// Columns that are always held as strings after standardization.
const STRING_COLUMNS: [StandardColumn; 4] = [
    StandardColumn::CaseId,
    StandardColumn::Activity,
    StandardColumn::LifecycleTransition,
    StandardColumn::Instance,
];

/// Columns where a null makes the row unusable.
const NON_NULL_COLUMNS: [StandardColumn; 2] = [StandardColumn::CaseId, StandardColumn::Activity];

/// Rename and select the mapped columns of a raw event log.
///
/// The result holds one column per configured mapping slot, named by its
/// canonical wire name and ordered by canonical position.
pub fn standardize_columns(table: &DataFrame, mapping: &ColumnMapping) -> Result<DataFrame> {
    mapping.validate()?;

    let available: Vec<String> = table
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut columns = Vec::new();
    for (column, source) in mapping.to_standard_mapping() {
        if !available.iter().any(|name| *name == source) {
            return Err(MappingError::MissingSourceColumn {
                column,
                source_column: source,
                available: available.join(", "),
            }
            .into());
        }

        let mut renamed = table.column(&source)?.clone();
        renamed.rename(column.as_str().into());
        if STRING_COLUMNS.contains(&column) && renamed.dtype() != &DataType::String {
            renamed = renamed.cast(&DataType::String)?;
        }
        columns.push(renamed);
    }

    let standardized = DataFrame::new(columns)?;
    for column in NON_NULL_COLUMNS {
        if let Some(row) = first_null_row(&standardized, column)? {
            return Err(TransformError::MissingValue { column, row });
        }
    }

    tracing::debug!(
        columns = standardized.width(),
        rows = standardized.height(),
        "standardized columns"
    );
    Ok(standardized)
}

/// Position of the first null in a column, if any.
pub(crate) fn first_null_row(df: &DataFrame, column: StandardColumn) -> Result<Option<usize>> {
    let series = df.column(column.as_str())?;
    if series.null_count() == 0 {
        return Ok(None);
    }
    let mask = series.is_null();
    Ok((&mask).into_iter().position(|is_null| is_null == Some(true)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_log() -> DataFrame {
        DataFrame::new(vec![
            Series::new("Case".into(), vec![1i64, 1, 2]).into(),
            Series::new("Task".into(), vec!["A", "B", "A"]).into(),
            Series::new("When".into(), vec!["2024-01-01", "2024-01-02", "2024-01-03"]).into(),
            Series::new("Noise".into(), vec!["x", "y", "z"]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_renames_and_drops_unmapped_columns() {
        let mapping = ColumnMapping::new("Case", "Task", "When");
        let df = standardize_columns(&raw_log(), &mapping).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(
            names,
            vec!["case:concept:name", "concept:name", "time:timestamp"]
        );
    }

    #[test]
    fn test_case_id_is_coerced_to_string() {
        let mapping = ColumnMapping::new("Case", "Task", "When");
        let df = standardize_columns(&raw_log(), &mapping).unwrap();
        let case = df.column("case:concept:name").unwrap();
        assert_eq!(case.dtype(), &DataType::String);
        assert_eq!(case.str().unwrap().get(2), Some("2"));
    }

    #[test]
    fn test_missing_source_column() {
        let mapping = ColumnMapping::new("Case", "Task", "When")
            .with_column(StandardColumn::Resource, "Worker");
        let err = standardize_columns(&raw_log(), &mapping).unwrap_err();
        match err {
            TransformError::Mapping(MappingError::MissingSourceColumn {
                column,
                source_column,
                available,
            }) => {
                assert_eq!(column, StandardColumn::Resource);
                assert_eq!(source_column, "Worker");
                assert_eq!(available, "Case, Task, When, Noise");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_null_activity_is_rejected() {
        let df = DataFrame::new(vec![
            Series::new("Case".into(), vec!["1", "1"]).into(),
            Series::new("Task".into(), vec![Some("A"), None]).into(),
            Series::new("When".into(), vec!["2024-01-01", "2024-01-02"]).into(),
        ])
        .unwrap();
        let mapping = ColumnMapping::new("Case", "Task", "When");
        let err = standardize_columns(&df, &mapping).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingValue {
                column: StandardColumn::Activity,
                row: 1
            }
        ));
    }
}
