//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ppi",
    version,
    about = "Normalize process event logs and compute performance indicators",
    long_about = "Normalize process event logs into explicit start/complete activity \
                  instances and evaluate process performance indicators against them.\n\n\
                  Each log is described by a TOML dataset config naming its columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Format a raw event log into canonical start/complete events.
    Format(FormatArgs),

    /// Format an event log and evaluate indicators against it.
    Run(RunArgs),

    /// List registered indicators and their parameters.
    Indicators(SelectionArgs),
}

/// The log to read and where outputs go.
#[derive(Args)]
pub struct InputArgs {
    /// Raw event log (CSV).
    #[arg(value_name = "LOG")]
    pub log: PathBuf,

    /// Dataset config (TOML) with the column mapping.
    #[arg(long = "config", short = 'c', value_name = "TOML")]
    pub config: PathBuf,

    /// Output directory (default: the directory of LOG).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FormatArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Fill arguments missing from the config with values drawn from the log.
    #[arg(long = "sample-arguments")]
    pub sample_arguments: bool,
}

/// Indicator filters. Empty filters select everything.
#[derive(Args, Default)]
pub struct SelectionArgs {
    /// Only these dimensions (cost, flexibility, general, quality, time).
    #[arg(long = "dimension", value_name = "NAME", value_delimiter = ',')]
    pub dimensions: Vec<String>,

    /// Only these granularities (activities, cases, groups, instances).
    #[arg(long = "granularity", value_name = "NAME", value_delimiter = ',')]
    pub granularities: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
