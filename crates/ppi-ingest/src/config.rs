//! Dataset configuration files.
//!
//! A dataset config is a TOML file describing how to read one event log:
//!
//! ```toml
//! separator = ";"
//!
//! [mapping]
//! case_id_key = "Case ID"
//! activity_key = "Activity"
//! timestamp_key = "Complete"
//! start_timestamp_key = "Start"
//!
//! [timestamps]
//! format = "%Y/%m/%d %H:%M:%S"
//! dayfirst = false
//!
//! [arguments]
//! case_id = "1"
//! aggregation_mode = "sgl"
//! ```
//!
//! The `[arguments]` table is kept as raw TOML; indicator crates deserialize
//! it into their own argument type.

use std::path::Path;

use ppi_model::{ColumnMapping, FormatOptions};
use serde::Deserialize;

use crate::error::{IngestError, Result};

/// Parsed dataset configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Field separator. Detected from the header line when omitted.
    #[serde(default)]
    pub separator: Option<char>,

    /// Source column names for each canonical column.
    pub mapping: ColumnMapping,

    /// Timestamp parsing options.
    #[serde(default)]
    pub timestamps: FormatOptions,

    /// Indicator arguments, left untyped.
    #[serde(default)]
    pub arguments: toml::Table,
}

impl DatasetConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The separator as a single byte, if configured.
    pub fn separator_byte(&self) -> Option<u8> {
        self.separator.and_then(|c| u8::try_from(c).ok())
    }
}

/// Load and validate a dataset config file.
pub fn load_dataset_config(path: &Path) -> Result<DatasetConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let config = DatasetConfig::from_toml_str(&contents).map_err(|e| IngestError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(separator) = config.separator
        && !separator.is_ascii()
    {
        return Err(IngestError::Config {
            path: path.to_path_buf(),
            reason: format!("separator must be a single ASCII character, got {separator:?}"),
        });
    }
    config
        .mapping
        .validate()
        .map_err(|e| IngestError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), "loaded dataset config");
    Ok(config)
}
