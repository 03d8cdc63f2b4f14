//! CSV export of canonical event logs.

use std::io::Write;
use std::path::Path;

use crate::data_utils::any_to_string;
use crate::error::{Result, TransformError};
use crate::frame::EventLog;

/// Write the canonical table as CSV. Timestamps are RFC 3339 in UTC.
pub fn write_event_log_csv(log: &EventLog, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| TransformError::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    write_rows(log, file, path)?;
    tracing::info!(path = %path.display(), rows = log.len(), "wrote event log");
    Ok(())
}

/// Write the canonical table as CSV to any writer.
pub fn write_event_log<W: Write>(log: &EventLog, writer: W) -> Result<()> {
    write_rows(log, writer, Path::new("<writer>"))
}

fn write_rows<W: Write>(log: &EventLog, writer: W, target: &Path) -> Result<()> {
    let export_error = |message: String| TransformError::Export {
        path: target.to_path_buf(),
        message,
    };

    let mut csv = csv::Writer::from_writer(writer);
    let data = log.data();
    csv.write_record(data.get_column_names().iter().map(|name| name.as_str()))
        .map_err(|e| export_error(e.to_string()))?;

    let columns = data.get_columns();
    for row in 0..data.height() {
        let mut record = Vec::with_capacity(columns.len());
        for column in columns {
            record.push(any_to_string(column.get(row)?));
        }
        csv.write_record(&record)
            .map_err(|e| export_error(e.to_string()))?;
    }
    csv.flush().map_err(|e| export_error(e.to_string()))?;
    Ok(())
}
