//! Accessor helper tests against a formatted event log.

mod common;

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use polars::prelude::*;
use ppi_model::{ColumnMapping, FormatOptions, StandardColumn};
use ppi_indicators::IndicatorError;
use ppi_indicators::helpers::{activities, cases, cases_activities, instances};
use ppi_transform::format_event_log;

use common::{bare_atomic_log, two_case_log};

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn instance_rows_point_at_both_events() {
    let log = two_case_log();
    let rows = instances::rows(&log, "a1").unwrap();

    assert_eq!(rows.start, Some(0));
    assert_eq!(rows.complete, Some(1));
    assert_eq!(instances::cpl(&log, "a1").unwrap(), Some(1));
    assert_eq!(instances::start(&log, "a1").unwrap(), 0);
}

#[test]
fn instance_times_and_attributes() {
    let log = two_case_log();

    assert_eq!(
        instances::stime(&log, "b1").unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap()
    );
    assert_eq!(
        instances::ctime(&log, "b1").unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap()
    );
    assert_eq!(instances::case(&log, "a3").unwrap(), "c2");
    assert_eq!(instances::act(&log, "cx").unwrap(), "C");
    assert_eq!(instances::res(&log, "b1").unwrap().as_deref(), Some("R2"));
    assert_eq!(instances::hres(&log, "cx").unwrap().as_deref(), Some("Ann"));
    assert_eq!(instances::role(&log, "a2").unwrap().as_deref(), Some("manager"));
}

#[test]
fn unknown_instance_is_reported() {
    let log = two_case_log();
    let err = instances::stime(&log, "zz").unwrap_err();
    assert_eq!(
        err,
        IndicatorError::InstanceIdNotFound {
            instance_id: "zz".to_string()
        }
    );
}

#[test]
fn neighbouring_instances() {
    let log = two_case_log();

    assert_eq!(instances::prev_instances(&log, "b1").unwrap(), set(&["a1"]));
    assert_eq!(instances::prev_instances(&log, "a1").unwrap(), set(&[]));
    assert_eq!(instances::next_instances(&log, "a1").unwrap(), set(&["b1", "cx"]));
    assert_eq!(instances::next_instances(&log, "cx").unwrap(), set(&[]));
    assert_eq!(instances::next_instances(&log, "a2").unwrap(), set(&["a3"]));
}

#[test]
fn overlapping_instances() {
    let log = two_case_log();

    assert_eq!(instances::concstr(&log, "b1").unwrap(), set(&["cx"]));
    assert_eq!(instances::concstr(&log, "a1").unwrap(), set(&[]));
    assert_eq!(instances::prevstr(&log, "cx").unwrap(), set(&[]));
}

#[test]
fn case_accessors() {
    let log = two_case_log();

    assert_eq!(cases::events(&log, "c1").unwrap(), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(cases::act(&log, "c1").unwrap(), set(&["A", "B", "C"]));
    assert_eq!(cases::res(&log, "c2").unwrap(), set(&["R1", "R2"]));
    assert_eq!(cases::hres(&log, "c1").unwrap(), set(&["Ann", "Bob"]));
    assert_eq!(cases::role(&log, "c2").unwrap(), set(&["clerk", "manager"]));
    assert_eq!(cases::inst(&log, "c2").unwrap(), set(&["a2", "a3"]));
    assert_eq!(cases::strin(&log, "c1").unwrap(), set(&["a1"]));
    assert_eq!(cases::endin(&log, "c1").unwrap(), set(&["cx"]));
    assert_eq!(
        cases::startt(&log, "c1").unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    );
    assert_eq!(
        cases::endt(&log, "c1").unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    );
}

#[test]
fn unknown_and_empty_case_ids_are_not_found() {
    let log = two_case_log();

    assert!(matches!(
        cases::act(&log, "c9"),
        Err(IndicatorError::CaseIdNotFound { .. })
    ));
    assert!(matches!(
        cases::inst(&log, ""),
        Err(IndicatorError::CaseIdNotFound { .. })
    ));
}

#[test]
fn case_activity_instances() {
    let log = two_case_log();

    assert_eq!(
        cases_activities::inst(&log, "c2", "A").unwrap(),
        set(&["a2", "a3"])
    );
    assert_eq!(cases_activities::count(&log, "c2", "A").unwrap(), 2);
    assert_eq!(cases_activities::count(&log, "c2", "B").unwrap(), 0);
    assert!(matches!(
        cases_activities::count(&log, "c2", "Z"),
        Err(IndicatorError::ActivityNameNotFound { .. })
    ));
}

#[test]
fn activity_accessors() {
    let log = two_case_log();

    assert_eq!(activities::inst(&log, "A").unwrap(), set(&["a1", "a2", "a3"]));
    assert_eq!(activities::res(&log, "A").unwrap(), set(&["R1", "R2"]));
    assert_eq!(activities::hres(&log, "B").unwrap(), set(&["Bob"]));
}

#[test]
fn missing_optional_column_lists_available_columns() {
    let log = bare_atomic_log();
    let instance_id = log.events()[0].instance_id.clone();

    let err = instances::hres(&log, &instance_id).unwrap_err();
    match err {
        IndicatorError::ColumnNotFound { column, available } => {
            assert_eq!(column, StandardColumn::HumanResource);
            assert!(available.contains("case:concept:name"));
            assert!(!available.contains("human_resource"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lone_complete_starts_at_its_complete() {
    let raw = DataFrame::new(vec![
        Series::new("case".into(), vec!["1"]).into(),
        Series::new("act".into(), vec!["A"]).into(),
        Series::new("t".into(), vec!["2024-01-01 05:00"]).into(),
        Series::new("life".into(), vec!["complete"]).into(),
    ])
    .unwrap();
    let mapping = ColumnMapping::new("case", "act", "t")
        .with_column(StandardColumn::LifecycleTransition, "life");
    let log = format_event_log(&raw, &mapping, &FormatOptions::default()).unwrap();
    let instance_id = log.events()[0].instance_id.clone();

    assert_eq!(instances::start(&log, &instance_id).unwrap(), 0);
    assert_eq!(
        instances::stime(&log, &instance_id).unwrap(),
        instances::ctime(&log, &instance_id).unwrap()
    );
    assert!(matches!(
        cases::startt(&log, "1"),
        Err(IndicatorError::NoStartEvent { .. })
    ));
}
