use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use ppi_indicators::{
    IndicatorArguments, Param, ResultSummary, run_indicators, select_indicators, summarize_results,
    write_results_csv, write_summary_csv,
};
use ppi_ingest::{DatasetConfig, load_dataset_config, read_event_log_csv};
use ppi_model::LogShape;
use ppi_transform::{EventLog, format_event_log, write_event_log_csv};

use crate::cli::{FormatArgs, InputArgs, RunArgs, SelectionArgs};
use crate::summary::apply_table_style;

/// What `ppi format` produced.
#[derive(Debug)]
pub struct FormatOutcome {
    pub log_name: String,
    pub shape: LogShape,
    pub events: usize,
    pub cases: usize,
    pub activities: usize,
    pub formatted: PathBuf,
}

/// What `ppi run` produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub format: FormatOutcome,
    pub results: PathBuf,
    pub summary: PathBuf,
    pub summaries: Vec<ResultSummary>,
}

impl RunOutcome {
    /// Indicators that raised an error while computing. Missing arguments and
    /// unimplemented indicators do not count.
    pub fn failed(&self) -> usize {
        self.summaries.iter().map(|s| s.failed).sum()
    }
}

pub fn run_format(args: &FormatArgs) -> Result<FormatOutcome> {
    let (log_name, _, log) = load_and_format(&args.input)?;
    write_formatted(&args.input, log_name, &log)
}

pub fn run_batch(args: &RunArgs) -> Result<RunOutcome> {
    let (log_name, config, log) = load_and_format(&args.input)?;
    let span = info_span!("indicators", log = %log_name);
    let _guard = span.enter();

    let mut arguments = IndicatorArguments::from_toml_table(config.arguments)
        .context("parse indicator arguments")?;
    if args.sample_arguments {
        arguments = arguments.or(IndicatorArguments::sampled_from(&log));
    }
    let specs = select_indicators(&args.selection.dimensions, &args.selection.granularities)
        .context("select indicators")?;

    let started = Instant::now();
    let results = run_indicators(&log, &arguments, &specs);
    info!(
        indicators = results.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "indicator run finished"
    );

    let output_dir = output_dir(&args.input)?;
    let results_path = output_dir.join(format!("results_{log_name}.csv"));
    let summary_path = output_dir.join(format!("summary_{log_name}.csv"));
    let summaries = summarize_results(&results);
    write_results_csv(&results, &results_path).context("write indicator results")?;
    write_summary_csv(&summaries, &summary_path).context("write indicator summary")?;

    let format = write_formatted(&args.input, log_name, &log)?;
    Ok(RunOutcome {
        format,
        results: results_path,
        summary: summary_path,
        summaries,
    })
}

pub fn run_list(args: &SelectionArgs) -> Result<()> {
    let specs = select_indicators(&args.dimensions, &args.granularities)
        .context("select indicators")?;
    let mut table = Table::new();
    table.set_header(vec!["Module", "Indicator", "Parameters", "Implemented"]);
    apply_table_style(&mut table);
    for spec in &specs {
        let params: Vec<&str> = spec.params.iter().map(Param::as_str).collect();
        table.add_row(vec![
            spec.module(),
            spec.name.to_string(),
            params.join(", "),
            if spec.is_implemented() { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
    println!("{} indicators", specs.len());
    Ok(())
}

fn load_and_format(input: &InputArgs) -> Result<(String, DatasetConfig, EventLog)> {
    let log_name = log_name(&input.log);
    let span = info_span!("format", log = %log_name);
    let _guard = span.enter();

    let config = load_dataset_config(&input.config)
        .with_context(|| format!("load dataset config {}", input.config.display()))?;
    let raw = read_event_log_csv(&input.log, config.separator_byte())
        .with_context(|| format!("read event log {}", input.log.display()))?;
    let log = format_event_log(&raw, &config.mapping, &config.timestamps)
        .with_context(|| format!("format event log {}", input.log.display()))?;
    Ok((log_name, config, log))
}

fn write_formatted(input: &InputArgs, log_name: String, log: &EventLog) -> Result<FormatOutcome> {
    let formatted = output_dir(input)?.join(format!("formatted_{log_name}.csv"));
    write_event_log_csv(log, &formatted).context("write formatted event log")?;
    Ok(FormatOutcome {
        log_name,
        shape: log.source_shape(),
        events: log.len(),
        cases: log.case_ids().len(),
        activities: log.activities().len(),
        formatted,
    })
}

fn output_dir(input: &InputArgs) -> Result<PathBuf> {
    let dir = match &input.output_dir {
        Some(dir) => dir.clone(),
        None => input
            .log
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
    }
    Ok(dir)
}

/// File stem of the log, used to name outputs.
pub fn log_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "event_log".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_name_strips_extension() {
        assert_eq!(log_name(Path::new("data/production.csv")), "production");
        assert_eq!(log_name(Path::new("")), "event_log");
    }
}
