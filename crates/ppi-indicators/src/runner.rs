//! Batch indicator execution.
//!
//! Every selected indicator yields exactly one result row. Missing arguments,
//! unimplemented indicators, and computation errors are recorded on the row;
//! they never abort the batch.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::Path;

use ppi_transform::EventLog;
use serde::Serialize;
use tracing::{debug, info};

use crate::arguments::IndicatorArguments;
use crate::error::{IndicatorError, Result};
use crate::registry::{Dimension, Granularity, IndicatorSpec, Param};
use crate::value::IndicatorValue;

/// Why an indicator produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingArgs,
    NotImplemented,
    Failed,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::MissingArgs => "missing_args",
            FailureKind::NotImplemented => "not_implemented",
            FailureKind::Failed => "failed",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorResult {
    pub dimension: Dimension,
    pub granularity: Granularity,
    pub name: &'static str,
    pub value: IndicatorValue,
    pub failure: Option<FailureKind>,
    pub missing_args: Vec<Param>,
    pub error: Option<String>,
}

impl IndicatorResult {
    fn new(spec: &IndicatorSpec) -> Self {
        Self {
            dimension: spec.dimension,
            granularity: spec.granularity,
            name: spec.name,
            value: IndicatorValue::Missing,
            failure: None,
            missing_args: Vec::new(),
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn status(&self) -> &'static str {
        if self.is_success() { "success" } else { "error" }
    }
}

/// Run `specs` against `log`.
pub fn run_indicators(
    log: &EventLog,
    args: &IndicatorArguments,
    specs: &[IndicatorSpec],
) -> Vec<IndicatorResult> {
    let results: Vec<IndicatorResult> = specs.iter().map(|spec| run_one(log, args, spec)).collect();

    let succeeded = results.iter().filter(|r| r.is_success()).count();
    info!(
        indicators = results.len(),
        succeeded,
        failed = results.len() - succeeded,
        "indicators evaluated"
    );
    results
}

fn run_one(log: &EventLog, args: &IndicatorArguments, spec: &IndicatorSpec) -> IndicatorResult {
    let mut result = IndicatorResult::new(spec);

    let missing = spec.missing_params(args);
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(Param::as_str).collect();
        result.error = Some(format!("missing required args: {}", names.join(", ")));
        result.failure = Some(FailureKind::MissingArgs);
        result.missing_args = missing;
        debug!(indicator = spec.name, module = %spec.module(), missing = ?names, "skipped");
        return result;
    }

    match spec.evaluate(log, args) {
        Ok(value) => result.value = value,
        Err(err) => {
            let kind = match err {
                IndicatorError::NotImplemented { .. } => FailureKind::NotImplemented,
                _ => FailureKind::Failed,
            };
            debug!(indicator = spec.name, module = %spec.module(), error = %err, "indicator failed");
            result.failure = Some(kind);
            result.error = Some(err.to_string());
        }
    }
    result
}

const RESULT_HEADER: [&str; 12] = [
    "dimension",
    "granularity",
    "module",
    "indicator_name",
    "status",
    "error_type",
    "missing_args",
    "error",
    "result",
    "result_type",
    "result_numeric",
    "result_seconds",
];

/// Write one CSV row per result.
pub fn write_results_csv(results: &[IndicatorResult], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| export_error(path, e))?;
    write_rows(results, file, path)?;
    info!(path = %path.display(), rows = results.len(), "wrote indicator results");
    Ok(())
}

pub fn write_results<W: Write>(results: &[IndicatorResult], writer: W) -> Result<()> {
    write_rows(results, writer, Path::new("<writer>"))
}

fn write_rows<W: Write>(results: &[IndicatorResult], writer: W, target: &Path) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(RESULT_HEADER)
        .map_err(|e| export_error(target, e))?;

    for result in results {
        let normalized = result.value.normalize();
        let missing_args = if result.missing_args.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&result.missing_args).map_err(|e| export_error(target, e))?
        };
        let record = [
            result.dimension.to_string(),
            result.granularity.to_string(),
            format!("{}.{}", result.dimension, result.granularity),
            result.name.to_string(),
            result.status().to_string(),
            result.failure.map(|f| f.as_str().to_string()).unwrap_or_default(),
            missing_args,
            result.error.clone().unwrap_or_default(),
            normalized.result,
            normalized.result_type.to_string(),
            normalized
                .result_numeric
                .map(|n| format!("{n}"))
                .unwrap_or_default(),
            normalized
                .result_seconds
                .map(|s| format!("{s}"))
                .unwrap_or_default(),
        ];
        csv.write_record(&record)
            .map_err(|e| export_error(target, e))?;
    }
    csv.flush().map_err(|e| export_error(target, e))?;
    Ok(())
}

/// Result counts for one dimension and granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub dimension: Dimension,
    pub granularity: Granularity,
    pub total: usize,
    pub succeeded: usize,
    pub missing_args: usize,
    pub not_implemented: usize,
    pub failed: usize,
}

/// Count results per dimension and granularity, in registry order.
pub fn summarize_results(results: &[IndicatorResult]) -> Vec<ResultSummary> {
    let mut groups: BTreeMap<(Dimension, Granularity), ResultSummary> = BTreeMap::new();
    for result in results {
        let summary = groups
            .entry((result.dimension, result.granularity))
            .or_insert_with(|| ResultSummary {
                dimension: result.dimension,
                granularity: result.granularity,
                total: 0,
                succeeded: 0,
                missing_args: 0,
                not_implemented: 0,
                failed: 0,
            });
        summary.total += 1;
        match result.failure {
            None => summary.succeeded += 1,
            Some(FailureKind::MissingArgs) => summary.missing_args += 1,
            Some(FailureKind::NotImplemented) => summary.not_implemented += 1,
            Some(FailureKind::Failed) => summary.failed += 1,
        }
    }
    groups.into_values().collect()
}

const SUMMARY_HEADER: [&str; 7] = [
    "dimension",
    "granularity",
    "total",
    "succeeded",
    "missing_args",
    "not_implemented",
    "failed",
];

/// Write summaries as CSV, one row per dimension and granularity. The header
/// is written even when there are no summaries.
pub fn write_summary_csv(summaries: &[ResultSummary], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| export_error(path, e))?;
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    csv.write_record(SUMMARY_HEADER)
        .map_err(|e| export_error(path, e))?;
    for summary in summaries {
        csv.serialize(summary).map_err(|e| export_error(path, e))?;
    }
    csv.flush().map_err(|e| export_error(path, e))?;
    Ok(())
}

fn export_error(path: &Path, err: impl fmt::Display) -> IndicatorError {
    IndicatorError::Export {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
