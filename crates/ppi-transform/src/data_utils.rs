//! DataFrame value extraction helpers.

use chrono::{DateTime, Utc};
use polars::prelude::*;

/// Converts a Polars `AnyValue` to a `String`.
///
/// Returns an empty string for `Null` and formats floats without trailing
/// zeros, so `3.0` becomes `"3"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use ppi_transform::data_utils::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(2.50)), "2.5");
/// assert_eq!(any_to_string(AnyValue::String("Turning")), "Turning");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        datetime @ (AnyValue::Datetime(..) | AnyValue::DatetimeOwned(..)) => {
            any_to_datetime(datetime)
                .map(|ts| format_timestamp(&ts))
                .unwrap_or_default()
        }
        other => other.to_string(),
    }
}

/// Formats a float without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for nulls and
/// non-numeric strings.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Converts a typed datetime or date value to a UTC instant.
///
/// Naive datetimes are read as UTC.
pub fn any_to_datetime(value: AnyValue<'_>) -> Option<DateTime<Utc>> {
    match value {
        AnyValue::Datetime(v, unit, _) | AnyValue::DatetimeOwned(v, unit, _) => match unit {
            TimeUnit::Milliseconds => DateTime::from_timestamp_millis(v),
            TimeUnit::Microseconds => DateTime::from_timestamp_micros(v),
            TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(v)),
        },
        AnyValue::Date(days) => DateTime::from_timestamp(i64::from(days) * 86_400, 0),
        _ => None,
    }
}

/// Formats an instant as RFC 3339 with a `Z` suffix.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
}

/// Extracts a column as strings. Nulls become `None`.
pub fn column_strings(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx)?;
        values.push(match value {
            AnyValue::Null => None,
            other => Some(any_to_string(other)),
        });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(-2.25), "-2.25");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Int32(7)), Some(7.0));
        assert_eq!(any_to_f64(AnyValue::String(" 2.5 ")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::String("n/a")), None);
        assert_eq!(any_to_f64(AnyValue::Null), None);
    }

    #[test]
    fn test_any_to_datetime_units() {
        let expected = DateTime::from_timestamp(1_704_067_200, 0).unwrap();
        assert_eq!(
            any_to_datetime(AnyValue::Datetime(
                1_704_067_200_000,
                TimeUnit::Milliseconds,
                None
            )),
            Some(expected)
        );
        assert_eq!(
            any_to_datetime(AnyValue::Datetime(
                1_704_067_200_000_000_000,
                TimeUnit::Nanoseconds,
                None
            )),
            Some(expected)
        );
        assert_eq!(any_to_datetime(AnyValue::Date(19_723)), Some(expected));
    }

    #[test]
    fn test_format_timestamp() {
        let ts = DateTime::from_timestamp(1_704_067_200, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-01T00:00:00Z");
    }
}
