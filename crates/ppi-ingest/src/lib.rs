//! Event log ingestion.
//!
//! Loads raw event logs from CSV into Polars DataFrames and reads the TOML
//! dataset configs that describe how a log's columns map to canonical ones.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ppi_ingest::{load_dataset_config, read_event_log_csv};
//!
//! let config = load_dataset_config(Path::new("production.toml"))?;
//! let raw = read_event_log_csv(Path::new("production.csv"), config.separator_byte())?;
//! ```

mod config;
mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CANDIDATE_SEPARATORS, detect_separator, read_event_log_csv};

// === Dataset Config ===
pub use config::{DatasetConfig, load_dataset_config};
