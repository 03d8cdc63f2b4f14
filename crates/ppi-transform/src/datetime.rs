//! Timestamp parsing into UTC instants.
//!
//! Values carrying an offset are converted to UTC. Values without one are read
//! as UTC wall-clock time. Three modes are supported (see [`TimestampFormat`]):
//! an explicit pattern, strict ISO 8601, and per-value inference over a list
//! of common layouts where `dayfirst` decides between `dd/mm` and `mm/dd`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use polars::prelude::*;
use ppi_model::{FormatOptions, StandardColumn, TimestampFormat};

use crate::data_utils::{any_to_datetime, any_to_string};
use crate::error::{Result, TransformError};

/// Layouts with an explicit UTC offset.
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// Year-first layouts, never ambiguous.
const ISO_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const YEAR_FIRST_FORMATS: [&str; 2] = ["%Y/%m/%d %H:%M:%S%.f", "%Y/%m/%d %H:%M"];

const DAY_FIRST_FORMATS: [&str; 6] = [
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
];

const MONTH_FIRST_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m-%d-%Y %H:%M:%S%.f",
    "%m-%d-%Y %H:%M",
];

const NAMED_MONTH_FORMATS: [&str; 4] = [
    "%d-%b-%Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%d-%b-%Y %H:%M",
    "%b %d, %Y %H:%M:%S",
];

const DAY_FIRST_DATES: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];
const MONTH_FIRST_DATES: [&str; 2] = ["%m/%d/%Y", "%m-%d-%Y"];
const OTHER_DATES: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%b-%Y", "%d %b %Y", "%Y%m%d"];

/// Parse a single timestamp string.
///
/// Returns `None` for empty or unparseable values.
pub fn parse_timestamp(value: &str, options: &FormatOptions) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match &options.timestamp_format {
        TimestampFormat::Explicit(pattern) => parse_with_pattern(trimmed, pattern),
        TimestampFormat::Iso8601 => parse_iso8601(trimmed),
        TimestampFormat::Mixed => parse_iso8601(trimmed).or_else(|| infer(trimmed, options.dayfirst)),
    }
}

/// Parse an entire timestamp column.
///
/// Columns already typed as datetime or date are converted without string
/// parsing. Any null or unparseable value fails the whole column.
pub fn parse_timestamp_column(
    df: &DataFrame,
    column: StandardColumn,
    options: &FormatOptions,
) -> Result<Vec<DateTime<Utc>>> {
    let series = df.column(column.as_str())?;
    let typed = matches!(series.dtype(), DataType::Datetime(_, _) | DataType::Date);

    let mut parsed = Vec::with_capacity(series.len());
    for row in 0..series.len() {
        let value = series.get(row)?;
        let instant = if typed {
            any_to_datetime(value.clone())
        } else {
            match &value {
                AnyValue::Null => None,
                other => parse_timestamp(&any_to_string(other.clone()), options),
            }
        };
        let Some(instant) = instant else {
            return Err(TransformError::Timestamp {
                column,
                row,
                value: any_to_string(value),
            });
        };
        parsed.push(instant);
    }
    Ok(parsed)
}

/// Python-style `.%f` means "fraction digits"; chrono spells that `%.f`.
fn chrono_pattern(pattern: &str) -> String {
    pattern.replace(".%f", "%.f")
}

fn parse_with_pattern(value: &str, pattern: &str) -> Option<DateTime<Utc>> {
    let pattern = chrono_pattern(pattern);
    if let Ok(dt) = DateTime::parse_from_str(value, &pattern) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, &pattern) {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, &pattern)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    first_offset_match(value, &OFFSET_FORMATS)
        .or_else(|| first_naive_match(value, &ISO_DATETIME_FORMATS))
        .or_else(|| first_date_match(value, &["%Y-%m-%d"]))
}

fn infer(value: &str, dayfirst: bool) -> Option<DateTime<Utc>> {
    let (first, second): (&[&str], &[&str]) = if dayfirst {
        (&DAY_FIRST_FORMATS, &MONTH_FIRST_FORMATS)
    } else {
        (&MONTH_FIRST_FORMATS, &DAY_FIRST_FORMATS)
    };
    let (first_dates, second_dates): (&[&str], &[&str]) = if dayfirst {
        (&DAY_FIRST_DATES, &MONTH_FIRST_DATES)
    } else {
        (&MONTH_FIRST_DATES, &DAY_FIRST_DATES)
    };

    first_naive_match(value, &YEAR_FIRST_FORMATS)
        .or_else(|| first_naive_match(value, first))
        .or_else(|| first_naive_match(value, second))
        .or_else(|| first_naive_match(value, &NAMED_MONTH_FORMATS))
        .or_else(|| first_date_match(value, &OTHER_DATES))
        .or_else(|| first_date_match(value, first_dates))
        .or_else(|| first_date_match(value, second_dates))
}

fn first_offset_match(value: &str, formats: &[&str]) -> Option<DateTime<Utc>> {
    formats
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn first_naive_match(value: &str, formats: &[&str]) -> Option<DateTime<Utc>> {
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.and_utc())
}

fn first_date_match(value: &str, formats: &[&str]) -> Option<DateTime<Utc>> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_rfc3339_with_offset_converts_to_utc() {
        let options = FormatOptions::default();
        assert_eq!(
            parse_timestamp("2024-01-01T10:00:00+02:00", &options),
            Some(utc(2024, 1, 1, 8, 0, 0))
        );
        assert_eq!(
            parse_timestamp("2024-01-01 10:00:00+02:00", &options),
            Some(utc(2024, 1, 1, 8, 0, 0))
        );
    }

    #[test]
    fn test_naive_values_are_utc() {
        let options = FormatOptions::default();
        assert_eq!(
            parse_timestamp("2024-03-05 07:30:00", &options),
            Some(utc(2024, 3, 5, 7, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2024-03-05", &options),
            Some(utc(2024, 3, 5, 0, 0, 0))
        );
    }

    #[test]
    fn test_dayfirst_resolves_ambiguous_dates() {
        let month_first = FormatOptions::default();
        let day_first = FormatOptions::default().with_dayfirst(true);
        assert_eq!(
            parse_timestamp("01/02/2024 10:00:00", &month_first),
            Some(utc(2024, 1, 2, 10, 0, 0))
        );
        assert_eq!(
            parse_timestamp("01/02/2024 10:00:00", &day_first),
            Some(utc(2024, 2, 1, 10, 0, 0))
        );
    }

    #[test]
    fn test_unambiguous_day_first_without_flag() {
        let options = FormatOptions::default();
        assert_eq!(
            parse_timestamp("25/12/2023 18:00", &options),
            Some(utc(2023, 12, 25, 18, 0, 0))
        );
    }

    #[test]
    fn test_explicit_pattern() {
        let options = FormatOptions::default().with_format("%Y/%m/%d %H:%M:%S");
        assert_eq!(
            parse_timestamp("2012/01/29 23:24:00", &options),
            Some(utc(2012, 1, 29, 23, 24, 0))
        );
        assert_eq!(parse_timestamp("29.01.2012 23:24", &options), None);
    }

    #[test]
    fn test_explicit_pattern_with_python_fraction() {
        let options = FormatOptions::default().with_format("%Y-%m-%d %H:%M:%S.%f");
        let parsed = parse_timestamp("2024-01-01 08:00:00.250000", &options).unwrap();
        assert_eq!(parsed.timestamp_millis(), utc(2024, 1, 1, 8, 0, 0).timestamp_millis() + 250);
    }

    #[test]
    fn test_iso8601_mode_rejects_other_layouts() {
        let options = FormatOptions::default().with_format("ISO8601");
        assert!(parse_timestamp("2024-01-01T08:00:00Z", &options).is_some());
        assert!(parse_timestamp("01/02/2024 10:00", &options).is_none());
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(parse_timestamp("   ", &FormatOptions::default()), None);
    }

    #[test]
    fn test_parse_column_reports_row() {
        let df = DataFrame::new(vec![
            Series::new("time:timestamp".into(), vec!["2024-01-01", "garbage"]).into(),
        ])
        .unwrap();
        let err =
            parse_timestamp_column(&df, StandardColumn::Timestamp, &FormatOptions::default())
                .unwrap_err();
        match err {
            TransformError::Timestamp { row, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(value, "garbage");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_typed_datetime_column() {
        let millis = Int64Chunked::from_vec("time:timestamp".into(), vec![1_704_067_200_000])
            .into_datetime(TimeUnit::Milliseconds, None)
            .into_series();
        let df = DataFrame::new(vec![millis.into()]).unwrap();
        let parsed =
            parse_timestamp_column(&df, StandardColumn::Timestamp, &FormatOptions::default())
                .unwrap();
        assert_eq!(parsed, vec![utc(2024, 1, 1, 0, 0, 0)]);
    }
}
