//! Process performance indicators over canonical event logs.
//!
//! - **helpers**: keyed accessors for instances, cases, and activities
//! - **indicators**: indicator functions by dimension and granularity
//! - **registry**: the catalogue of indicators and their parameters
//! - **arguments**: argument bundles, from configuration or sampled from a log
//! - **runner**: batch execution, result rows, and summaries

pub mod arguments;
pub mod division;
pub mod error;
pub mod helpers;
pub mod indicators;
pub mod registry;
pub mod runner;
pub mod value;

pub use arguments::{AggregationMode, ArgumentValue, IndicatorArguments};
pub use division::safe_division;
pub use error::{IndicatorError, Result};
pub use registry::{
    ComputeFn, Dimension, Granularity, IndicatorSpec, Param, registry, select_indicators,
};
pub use runner::{
    FailureKind, IndicatorResult, ResultSummary, run_indicators, summarize_results,
    write_results, write_results_csv, write_summary_csv,
};
pub use value::{IndicatorValue, NormalizedValue};
