//! Indicator output values and their flat, CSV-friendly form.

use std::collections::BTreeSet;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// The value an indicator produced.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorValue {
    /// The indicator has no value for this input (e.g. no cost recorded).
    Missing,
    Integer(i64),
    Float(f64),
    Duration(TimeDelta),
    Timestamp(DateTime<Utc>),
    Text(String),
    Set(BTreeSet<String>),
}

/// Flat columns for one indicator value.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedValue {
    pub result: String,
    pub result_type: &'static str,
    pub result_numeric: Option<f64>,
    pub result_seconds: Option<f64>,
}

impl IndicatorValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            IndicatorValue::Missing => "none",
            IndicatorValue::Integer(_) => "int",
            IndicatorValue::Float(_) => "float",
            IndicatorValue::Duration(_) => "duration",
            IndicatorValue::Timestamp(_) => "timestamp",
            IndicatorValue::Text(_) => "str",
            IndicatorValue::Set(_) => "set",
        }
    }

    pub fn normalize(&self) -> NormalizedValue {
        let (result, result_numeric, result_seconds) = match self {
            IndicatorValue::Missing => (String::new(), None, None),
            IndicatorValue::Integer(value) => (value.to_string(), Some(*value as f64), None),
            IndicatorValue::Float(value) => (value.to_string(), Some(*value), None),
            IndicatorValue::Duration(delta) => {
                (format_duration(*delta), None, Some(duration_seconds(*delta)))
            }
            IndicatorValue::Timestamp(ts) => {
                (ts.to_rfc3339_opts(SecondsFormat::AutoSi, true), None, None)
            }
            IndicatorValue::Text(text) => (text.clone(), None, None),
            IndicatorValue::Set(items) => (
                serde_json::to_string(items).unwrap_or_default(),
                None,
                None,
            ),
        };
        NormalizedValue {
            result,
            result_type: self.type_name(),
            result_numeric,
            result_seconds,
        }
    }
}

impl From<usize> for IndicatorValue {
    fn from(value: usize) -> Self {
        IndicatorValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for IndicatorValue {
    fn from(value: f64) -> Self {
        IndicatorValue::Float(value)
    }
}

impl From<Option<f64>> for IndicatorValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(IndicatorValue::Missing, IndicatorValue::Float)
    }
}

impl From<TimeDelta> for IndicatorValue {
    fn from(value: TimeDelta) -> Self {
        IndicatorValue::Duration(value)
    }
}

impl From<BTreeSet<String>> for IndicatorValue {
    fn from(value: BTreeSet<String>) -> Self {
        IndicatorValue::Set(value)
    }
}

/// Seconds in a duration, with millisecond precision.
pub fn duration_seconds(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 1000.0
}

/// Duration as `D days HH:MM:SS[.ffffff]`. Negative durations borrow a whole
/// day and show a positive clock part: `-1 days +23:00:00`.
pub fn format_duration(delta: TimeDelta) -> String {
    const DAY_MS: i64 = 86_400_000;
    let total_ms = delta.num_milliseconds();
    let days = total_ms.div_euclid(DAY_MS);
    let rest = total_ms.rem_euclid(DAY_MS);

    let hours = rest / 3_600_000;
    let minutes = rest / 60_000 % 60;
    let seconds = rest / 1000 % 60;
    let millis = rest % 1000;

    let sign = if total_ms < 0 { "+" } else { "" };
    let mut text = format!("{days} days {sign}{hours:02}:{minutes:02}:{seconds:02}");
    if millis > 0 {
        text.push_str(&format!(".{:06}", millis * 1000));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::hours(1)), "0 days 01:00:00");
        assert_eq!(
            format_duration(TimeDelta::days(2) + TimeDelta::milliseconds(1500)),
            "2 days 00:00:01.500000"
        );
        assert_eq!(format_duration(TimeDelta::hours(-1)), "-1 days +23:00:00");
    }

    #[test]
    fn test_normalize_duration_reports_seconds() {
        let normalized = IndicatorValue::Duration(TimeDelta::minutes(90)).normalize();
        assert_eq!(normalized.result, "0 days 01:30:00");
        assert_eq!(normalized.result_type, "duration");
        assert_eq!(normalized.result_seconds, Some(5400.0));
        assert_eq!(normalized.result_numeric, None);
    }

    #[test]
    fn test_normalize_set_is_sorted_json() {
        let set: BTreeSet<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
        let normalized = IndicatorValue::from(set).normalize();
        assert_eq!(normalized.result, r#"["a","b"]"#);
        assert_eq!(normalized.result_type, "set");
    }

    #[test]
    fn test_normalize_missing_is_empty() {
        let normalized = IndicatorValue::from(None::<f64>).normalize();
        assert_eq!(normalized.result, "");
        assert_eq!(normalized.result_type, "none");
    }
}
