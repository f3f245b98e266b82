//! JSON table reader.

use serde::Deserialize;
use series_core::table::{Row, Table};
use std::path::Path;
use tracing::debug;

use crate::error::IoError;
use crate::format::parse_date;

#[derive(Deserialize)]
struct RowRecord {
    date: String,
    rate: i64,
}

/// Decodes a JSON array of `{"date", "rate"}` objects.
///
/// Row order is preserved as found in the input.
pub fn decode_table(bytes: &[u8]) -> Result<Table, IoError> {
    let records: Vec<RowRecord> = serde_json::from_slice(bytes).map_err(IoError::Parse)?;

    let rows = records
        .into_iter()
        .enumerate()
        .map(|(row, record)| {
            parse_date(&record.date)
                .map(|date| Row::new(date, record.rate))
                .ok_or(IoError::InvalidDate {
                    row,
                    value: record.date,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Table::from_rows(rows))
}

/// Reads and decodes the table stored at `path`.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table, IoError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| IoError::io(path, e))?;
    let table = decode_table(&bytes)?;

    debug!(path = %path.display(), rows = table.len(), "Table read from file");

    Ok(table)
}
