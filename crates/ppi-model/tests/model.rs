//! Tests for ppi-model types.

use ppi_model::{
    ColumnMapping, FormatOptions, LogShape, MappingError, StandardColumn, TimestampFormat,
};

#[test]
fn mapping_deserializes_from_toml() {
    let mapping: ColumnMapping = toml::from_str(
        r#"
case_id_key = "Case ID"
activity_key = "Activity"
timestamp_key = "Complete"
start_timestamp_key = "Start"
resource_key = "Resource"
"#,
    )
    .expect("parse mapping");

    assert_eq!(mapping.case_id_key, "Case ID");
    assert_eq!(mapping.source_for(StandardColumn::StartTimestamp), Some("Start"));
    assert!(mapping.has(StandardColumn::Resource));
    assert!(!mapping.has(StandardColumn::Instance));
}

#[test]
fn mapping_rejects_unknown_fields() {
    let result: Result<ColumnMapping, _> = toml::from_str(
        r#"
case_id_key = "case"
activity_key = "activity"
timestamp_key = "ts"
not_a_real_field = "X"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn mapping_requires_mandatory_fields() {
    let result: Result<ColumnMapping, _> = toml::from_str(
        r#"
case_id_key = "case"
timestamp_key = "ts"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn unknown_column_message_lists_valid_names() {
    let err = ColumnMapping::from_standard_names([("not_a_real_field", "X")]).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("'not_a_real_field' is not a standard column name"));
    assert!(message.contains("case:concept:name"));
    assert!(message.contains("concept:instance"));
}

#[test]
fn missing_required_field_message() {
    let err = ColumnMapping::from_standard_names([
        ("case:concept:name", "case"),
        ("time:timestamp", "ts"),
    ])
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required mapping field 'activity_key' for column 'concept:name'"
    );
}

#[test]
fn from_standard_names_matches_field_mapping() {
    let by_name = ColumnMapping::from_standard_names([
        ("case:concept:name", "case"),
        ("concept:name", "activity"),
        ("time:timestamp", "ts"),
        ("lifecycle:transition", "lifecycle"),
        ("concept:instance", "instance"),
    ])
    .unwrap();
    let by_field = ColumnMapping::new("case", "activity", "ts")
        .with_column(StandardColumn::LifecycleTransition, "lifecycle")
        .with_column(StandardColumn::Instance, "instance");
    assert_eq!(by_name, by_field);
    assert_eq!(by_name.to_standard_mapping(), by_field.to_standard_mapping());
}

#[test]
fn missing_source_column_error_names_column() {
    let err = MappingError::MissingSourceColumn {
        column: StandardColumn::Resource,
        source_column: "Worker".to_string(),
        available: "case, activity".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"column 'Worker' mapped to 'org:resource' is not present in the event log; available columns: case, activity"
    );
}

#[test]
fn format_options_from_toml() {
    let options: FormatOptions = toml::from_str(
        r#"
format = "%Y/%m/%d %H:%M:%S"
dayfirst = true
"#,
    )
    .unwrap();
    assert_eq!(
        options.timestamp_format,
        TimestampFormat::Explicit("%Y/%m/%d %H:%M:%S".to_string())
    );
    assert!(options.dayfirst);

    let defaults: FormatOptions = toml::from_str("").unwrap();
    assert_eq!(defaults, FormatOptions::default());
    assert_eq!(defaults.timestamp_format, TimestampFormat::Mixed);
}

#[test]
fn timestamp_format_keywords() {
    assert_eq!(TimestampFormat::from("ISO8601"), TimestampFormat::Iso8601);
    assert_eq!(TimestampFormat::from("mixed"), TimestampFormat::Mixed);
    assert_eq!(TimestampFormat::from(""), TimestampFormat::Mixed);
    assert_eq!(
        TimestampFormat::from("%d.%m.%Y").to_string(),
        "%d.%m.%Y".to_string()
    );
}

#[test]
fn log_shape_flags() {
    assert!(LogShape::Atomic.needs_splitting());
    assert!(LogShape::ProductionStyle.needs_splitting());
    assert!(!LogShape::DerivableInterval.needs_splitting());
    assert!(LogShape::DerivableInterval.needs_matching());
    assert!(!LogShape::ExplicitInterval.needs_matching());
    assert_eq!(LogShape::ProductionStyle.to_string(), "PRODUCTION_STYLE");
}
