//! Loading a dataset config together with its event log.

use std::fs;

use ppi_ingest::{IngestError, load_dataset_config, read_event_log_csv};
use tempfile::tempdir;

#[test]
fn config_separator_drives_csv_reading() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("production.csv");
    let config_path = dir.path().join("production.toml");

    fs::write(
        &log_path,
        "Case ID|Activity|Start|Complete\n\
         1|Turning|2024/01/01 08:00:00|2024/01/01 09:00:00\n\
         1|Milling|2024/01/01 09:30:00|2024/01/01 10:00:00\n",
    )
    .unwrap();
    fs::write(
        &config_path,
        r#"
separator = "|"

[mapping]
case_id_key = "Case ID"
activity_key = "Activity"
timestamp_key = "Complete"
start_timestamp_key = "Start"

[timestamps]
format = "%Y/%m/%d %H:%M:%S"
"#,
    )
    .unwrap();

    let config = load_dataset_config(&config_path).unwrap();
    let df = read_event_log_csv(&log_path, config.separator_byte()).unwrap();

    assert_eq!(df.height(), 2);
    assert!(df.column("Start").is_ok());
    assert!(df.column("Complete").is_ok());
}

#[test]
fn missing_config_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = load_dataset_config(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_config_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[mapping\ncase_id_key = ").unwrap();
    let err = load_dataset_config(&path).unwrap_err();
    assert!(matches!(err, IngestError::ConfigRead { .. }));
}
