//! Shared event log fixtures.

#![allow(dead_code)]

use polars::prelude::*;
use ppi_model::{ColumnMapping, FormatOptions, StandardColumn};
use ppi_transform::{EventLog, SequentialIds, format_event_log_with};

/// Two cases with explicit instance ids.
///
/// Case `c1` runs A, then B and C concurrently. Case `c2` runs A twice.
pub fn two_case_log() -> EventLog {
    let raw = DataFrame::new(vec![
        Series::new(
            "case".into(),
            vec!["c1", "c1", "c1", "c1", "c1", "c1", "c2", "c2", "c2", "c2"],
        )
        .into(),
        Series::new(
            "act".into(),
            vec!["A", "A", "B", "B", "C", "C", "A", "A", "A", "A"],
        )
        .into(),
        Series::new(
            "t".into(),
            vec![
                "2024-01-01T09:00:00Z",
                "2024-01-01T10:00:00Z",
                "2024-01-01T10:30:00Z",
                "2024-01-01T11:00:00Z",
                "2024-01-01T10:30:00Z",
                "2024-01-01T12:00:00Z",
                "2024-01-02T09:00:00Z",
                "2024-01-02T09:30:00Z",
                "2024-01-02T10:00:00Z",
                "2024-01-02T11:00:00Z",
            ],
        )
        .into(),
        Series::new(
            "life".into(),
            vec![
                "start", "complete", "start", "complete", "start", "complete", "start",
                "complete", "start", "complete",
            ],
        )
        .into(),
        Series::new(
            "inst".into(),
            vec!["a1", "a1", "b1", "b1", "cx", "cx", "a2", "a2", "a3", "a3"],
        )
        .into(),
        Series::new(
            "res".into(),
            vec!["R1", "R1", "R2", "R2", "R1", "R1", "R2", "R2", "R1", "R1"],
        )
        .into(),
        Series::new(
            "hres".into(),
            vec!["Ann", "Ann", "Bob", "Bob", "Ann", "Ann", "Bob", "Bob", "Ann", "Ann"],
        )
        .into(),
        Series::new(
            "role".into(),
            vec![
                "clerk", "clerk", "manager", "manager", "clerk", "clerk", "manager", "manager",
                "clerk", "clerk",
            ],
        )
        .into(),
        Series::new(
            "total".into(),
            vec![4.0, 6.0, 3.0, 5.0, 0.0, 2.0, 1.0, 1.0, 2.0, 2.0],
        )
        .into(),
        Series::new(
            "labor".into(),
            vec![1.0, 2.0, 1.0, 1.0, 0.0, 1.0, 0.5, 0.5, 1.0, 1.0],
        )
        .into(),
        Series::new(
            "fixed".into(),
            vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        )
        .into(),
        Series::new(
            "maint".into(),
            vec![
                None,
                Some(3.0),
                None,
                Some(7.0),
                None,
                None,
                None,
                None,
                None,
                None,
            ],
        )
        .into(),
    ])
    .unwrap();

    let mapping = ColumnMapping::new("case", "act", "t")
        .with_column(StandardColumn::LifecycleTransition, "life")
        .with_column(StandardColumn::Instance, "inst")
        .with_column(StandardColumn::Resource, "res")
        .with_column(StandardColumn::HumanResource, "hres")
        .with_column(StandardColumn::Role, "role")
        .with_column(StandardColumn::TotalCost, "total")
        .with_column(StandardColumn::LaborCost, "labor")
        .with_column(StandardColumn::FixedCost, "fixed")
        .with_column(StandardColumn::MaintenanceCost, "maint");

    format_event_log_with(
        &raw,
        &mapping,
        &FormatOptions::default(),
        &mut SequentialIds::new(),
    )
    .unwrap()
}

/// An atomic log with only the three required columns.
pub fn bare_atomic_log() -> EventLog {
    let raw = DataFrame::new(vec![
        Series::new("case".into(), vec!["1", "1"]).into(),
        Series::new("act".into(), vec!["A", "B"]).into(),
        Series::new("t".into(), vec!["2024-01-01 10:00:00", "2024-01-01 10:05:00"]).into(),
    ])
    .unwrap();
    let mapping = ColumnMapping::new("case", "act", "t");
    format_event_log_with(
        &raw,
        &mapping,
        &FormatOptions::default(),
        &mut SequentialIds::new(),
    )
    .unwrap()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
