//! CSV event log reading with separator detection.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Separators tried when none is configured, in tie-break order.
pub const CANDIDATE_SEPARATORS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Rows scanned by Polars to infer column types.
const INFER_SCHEMA_ROWS: usize = 1000;

const UTF8_BOM: char = '\u{feff}';

/// Reads the header line of a CSV file with any UTF-8 BOM removed.
fn read_header_line(path: &Path) -> Result<Option<String>> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| IngestError::io(path, e))?;
    if read == 0 {
        return Ok(None);
    }
    let cleaned = line
        .strip_prefix(UTF8_BOM)
        .unwrap_or(&line)
        .trim_end_matches(['\r', '\n'])
        .to_string();
    Ok(Some(cleaned))
}

/// Picks the candidate separator occurring most often outside quotes.
///
/// Falls back to a comma when no candidate appears.
pub fn detect_separator(header: &str) -> u8 {
    let mut counts = [0usize; CANDIDATE_SEPARATORS.len()];
    let mut in_quotes = false;
    for byte in header.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        if let Some(idx) = CANDIDATE_SEPARATORS.iter().position(|c| *c == byte) {
            counts[idx] += 1;
        }
    }

    let mut best = 0;
    for (idx, count) in counts.iter().enumerate() {
        if *count > counts[best] {
            best = idx;
        }
    }
    CANDIDATE_SEPARATORS[best]
}

/// Reads an event log CSV into a Polars DataFrame.
///
/// When `separator` is `None` it is detected from the header line.
pub fn read_event_log_csv(path: &Path, separator: Option<u8>) -> Result<DataFrame> {
    let Some(header) = read_header_line(path)? else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    if header.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let separator = separator.unwrap_or_else(|| detect_separator(&header));
    tracing::debug!(
        path = %path.display(),
        separator = %char::from(separator).escape_default(),
        "reading event log"
    );

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_parse_options(CsvParseOptions::default().with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    strip_bom_from_first_column(&mut df).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded event log"
    );
    Ok(df)
}

fn strip_bom_from_first_column(df: &mut DataFrame) -> PolarsResult<()> {
    let first = df
        .get_column_names()
        .first()
        .map(|name| name.to_string());
    if let Some(name) = first
        && let Some(cleaned) = name.strip_prefix(UTF8_BOM)
    {
        let cleaned = cleaned.to_string();
        df.rename(&name, cleaned.into())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_detect_separator() {
        assert_eq!(detect_separator("case,activity,timestamp"), b',');
        assert_eq!(detect_separator("case;activity;timestamp"), b';');
        assert_eq!(detect_separator("case\tactivity\ttimestamp"), b'\t');
        assert_eq!(detect_separator("case|activity"), b'|');
        assert_eq!(detect_separator("single"), b',');
    }

    #[test]
    fn test_detect_separator_ignores_quoted_text() {
        assert_eq!(detect_separator("\"a;b;c\",\"d;e\",f"), b',');
    }

    #[test]
    fn test_read_semicolon_csv() {
        let file = create_temp_csv("case;activity;ts\n1;A;2024-01-01\n1;B;2024-01-02\n");
        let df = read_event_log_csv(file.path(), None).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_read_csv_with_bom() {
        let file = create_temp_csv("\u{feff}case,activity,ts\n1,A,2024-01-01\n");
        let df = read_event_log_csv(file.path(), None).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["case", "activity", "ts"]);
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let result = read_event_log_csv(file.path(), None);
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_header_only_file() {
        let file = create_temp_csv("case,activity,ts\n");
        let result = read_event_log_csv(file.path(), None);
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_event_log_csv(Path::new("/definitely/not/here.csv"), None);
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
