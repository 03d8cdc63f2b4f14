//! Command-level tests: argument parsing and end-to-end runs on temp files.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::tempdir;

use ppi_cli::cli::{Cli, Command, FormatArgs, InputArgs, RunArgs, SelectionArgs};
use ppi_cli::commands::{run_batch, run_format};
use ppi_indicators::registry;

const LOG: &str = "Case ID;Activity;Start;Complete\n\
                   1;Turning;2024/01/01 08:00:00;2024/01/01 09:00:00\n\
                   1;Milling;2024/01/01 09:30:00;2024/01/01 10:00:00\n\
                   2;Turning;2024/01/02 08:00:00;2024/01/02 08:45:00\n";

const CONFIG: &str = r#"
separator = ";"

[mapping]
case_id_key = "Case ID"
activity_key = "Activity"
timestamp_key = "Complete"
start_timestamp_key = "Start"

[timestamps]
format = "%Y/%m/%d %H:%M:%S"

[arguments]
case_id = "1"
aggregation_mode = "sgl"
"#;

fn write_inputs(dir: &Path) -> InputArgs {
    let log = dir.join("production.csv");
    let config = dir.join("production.toml");
    fs::write(&log, LOG).unwrap();
    fs::write(&config, CONFIG).unwrap();
    InputArgs {
        log,
        config,
        output_dir: Some(dir.join("out")),
    }
}

#[test]
fn parses_run_with_filters() {
    let cli = Cli::try_parse_from([
        "ppi",
        "run",
        "log.csv",
        "-c",
        "log.toml",
        "--dimension",
        "time,cost",
        "--granularity",
        "cases",
        "--sample-arguments",
    ])
    .unwrap();

    let Command::Run(args) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.input.log, Path::new("log.csv"));
    assert_eq!(args.selection.dimensions, vec!["time", "cost"]);
    assert_eq!(args.selection.granularities, vec!["cases"]);
    assert!(args.sample_arguments);
    assert!(args.input.output_dir.is_none());
}

#[test]
fn format_requires_config() {
    assert!(Cli::try_parse_from(["ppi", "format", "log.csv"]).is_err());
}

#[test]
fn format_writes_canonical_log() {
    let dir = tempdir().unwrap();
    let input = write_inputs(dir.path());

    let outcome = run_format(&FormatArgs { input }).unwrap();

    assert_eq!(outcome.log_name, "production");
    assert_eq!(outcome.events, 6);
    assert_eq!(outcome.cases, 2);
    assert_eq!(outcome.activities, 2);
    assert_eq!(outcome.formatted, dir.path().join("out/formatted_production.csv"));

    let text = fs::read_to_string(&outcome.formatted).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with(
        "case:concept:name,concept:name,time:timestamp,lifecycle:transition,concept:instance"
    ));
    assert_eq!(text.lines().count(), 7);
}

#[test]
fn run_writes_one_result_row_per_indicator() {
    let dir = tempdir().unwrap();
    let args = RunArgs {
        input: write_inputs(dir.path()),
        selection: SelectionArgs::default(),
        sample_arguments: true,
    };

    let outcome = run_batch(&args).unwrap();

    let results = fs::read_to_string(&outcome.results).unwrap();
    assert_eq!(results.lines().count(), registry().len() + 1);
    assert!(outcome.summary.exists());
    assert!(outcome.format.formatted.exists());

    let total: usize = outcome.summaries.iter().map(|s| s.total).sum();
    assert_eq!(total, registry().len());
    assert!(outcome.summaries.iter().any(|s| s.succeeded > 0));
}

#[test]
fn run_rejects_unknown_dimension() {
    let dir = tempdir().unwrap();
    let args = RunArgs {
        input: write_inputs(dir.path()),
        selection: SelectionArgs {
            dimensions: vec!["speed".to_string()],
            granularities: Vec::new(),
        },
        sample_arguments: false,
    };

    let err = run_batch(&args).unwrap_err();
    insta::assert_snapshot!(
        format!("{err:#}"),
        @"select indicators: unknown dimension(s): speed; allowed: cost, flexibility, general, quality, time"
    );
}
