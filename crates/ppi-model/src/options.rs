//! Options controlling how an event log is formatted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How timestamp strings are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimestampFormat {
    /// Infer the layout per value from a list of common layouts.
    #[default]
    Mixed,
    /// ISO 8601 / RFC 3339 only.
    Iso8601,
    /// A chrono `strftime` pattern applied to every value.
    Explicit(String),
}

impl TimestampFormat {
    pub fn as_str(&self) -> &str {
        match self {
            TimestampFormat::Mixed => "mixed",
            TimestampFormat::Iso8601 => "ISO8601",
            TimestampFormat::Explicit(pattern) => pattern,
        }
    }
}

impl From<String> for TimestampFormat {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("mixed") {
            TimestampFormat::Mixed
        } else if trimmed.eq_ignore_ascii_case("iso8601") {
            TimestampFormat::Iso8601
        } else {
            TimestampFormat::Explicit(trimmed.to_string())
        }
    }
}

impl From<&str> for TimestampFormat {
    fn from(value: &str) -> Self {
        TimestampFormat::from(value.to_string())
    }
}

impl From<TimestampFormat> for String {
    fn from(value: TimestampFormat) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for turning a raw table into a canonical event log.
///
/// Corresponds to the `[timestamps]` table of a dataset config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatOptions {
    /// Timestamp layout. Omitted means [`TimestampFormat::Mixed`].
    #[serde(default, rename = "format")]
    pub timestamp_format: TimestampFormat,

    /// Resolve ambiguous `01/02/2024` as 1 February instead of 2 January.
    #[serde(default)]
    pub dayfirst: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn with_dayfirst(mut self, dayfirst: bool) -> Self {
        self.dayfirst = dayfirst;
        self
    }
}
