//! JSON table writer.

use serde::Serialize;
use series_core::table::Table;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::IoError;
use crate::format::DateFormat;
use crate::{FileGenerator, WriteSummary};

/// Options controlling JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Representation of the `date` field
    pub date_format: DateFormat,
    /// Indent the JSON array, one field per line
    pub pretty: bool,
}

impl WriteOptions {
    /// Set the date format.
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Enable or disable pretty printing.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[derive(Serialize)]
struct RowRecord<'a> {
    date: &'a str,
    rate: i64,
}

/// A table paired with its output options.
pub struct JsonTable<'a> {
    table: &'a Table,
    options: WriteOptions,
}

impl<'a> JsonTable<'a> {
    /// Create a new JSON view of `table`
    pub fn new(table: &'a Table, options: WriteOptions) -> Self {
        Self { table, options }
    }
}

impl FileGenerator for JsonTable<'_> {
    fn generate(&self) -> Result<Vec<u8>, IoError> {
        encode_table(self.table, &self.options)
    }
}

/// Encodes the whole table as a JSON array in one buffer.
///
/// # Examples
///
/// ```
/// use series_core::prelude::*;
/// use series_io::{encode_table, DateFormat, WriteOptions};
///
/// let table = Table::assemble(vec![Date::from_ymd(2024, 1, 1).unwrap()], vec![-3]).unwrap();
/// let json = encode_table(&table, &WriteOptions::default()).unwrap();
/// assert_eq!(
///     String::from_utf8(json).unwrap(),
///     r#"[{"date":"2024-01-01T00:00:00.000Z","rate":-3}]"#
/// );
/// ```
pub fn encode_table(table: &Table, options: &WriteOptions) -> Result<Vec<u8>, IoError> {
    let dates: Vec<String> = table
        .iter()
        .map(|row| options.date_format.format(row.date))
        .collect();

    let records: Vec<RowRecord<'_>> = table
        .iter()
        .zip(&dates)
        .map(|(row, date)| RowRecord {
            date: date.as_str(),
            rate: row.rate,
        })
        .collect();

    let encoded = if options.pretty {
        serde_json::to_vec_pretty(&records)
    } else {
        serde_json::to_vec(&records)
    };
    encoded.map_err(IoError::Serialize)
}

/// Encodes `table` and writes it to `path` atomically.
pub fn write_table(
    table: &Table,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<WriteSummary, IoError> {
    let path = path.as_ref();
    let summary = JsonTable::new(table, *options).write_to_file(path)?;

    info!(
        path = %path.display(),
        rows = table.len(),
        bytes = summary.bytes,
        date_format = %options.date_format,
        "Table written to file"
    );

    Ok(summary)
}

/// Writes `bytes` to `path` in a single pass.
///
/// The payload goes to a temporary file in the destination directory,
/// which is then renamed over `path`. On any error the temporary file is
/// removed and an existing file at `path` is left untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), IoError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".rate-series-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| IoError::io(dir, e))?;

    write_payload(&mut tmp, bytes).map_err(|e| IoError::io(tmp.path(), e))?;

    debug!(tmp = %tmp.path().display(), bytes = bytes.len(), "Payload staged");

    tmp.persist(path)
        .map_err(|e| IoError::io(path, e.error))?;

    Ok(())
}

fn write_payload(tmp: &mut NamedTempFile, bytes: &[u8]) -> std::io::Result<()> {
    tmp.write_all(bytes)?;
    tmp.flush()?;

    // Temp files are created owner-only; published files should not be
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    tmp.as_file().sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use series_core::prelude::*;

    fn sample_table() -> Table {
        Table::assemble(
            vec![
                Date::from_ymd(2024, 1, 1).unwrap(),
                Date::from_ymd(2024, 1, 2).unwrap(),
            ],
            vec![-3, 7],
        )
        .unwrap()
    }

    #[test]
    fn test_encode_datetime_format() {
        let json = encode_table(&sample_table(), &WriteOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            r#"[{"date":"2024-01-01T00:00:00.000Z","rate":-3},{"date":"2024-01-02T00:00:00.000Z","rate":7}]"#
        );
    }

    #[test]
    fn test_encode_date_format() {
        let options = WriteOptions::default().with_date_format(DateFormat::IsoDate);
        let json = encode_table(&sample_table(), &options).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            r#"[{"date":"2024-01-01","rate":-3},{"date":"2024-01-02","rate":7}]"#
        );
    }

    #[test]
    fn test_encode_pretty_is_still_valid_json() {
        let options = WriteOptions::default().with_pretty(true);
        let json = encode_table(&sample_table(), &options).unwrap();
        let text = String::from_utf8(json).unwrap();
        assert!(text.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_encode_empty_table() {
        let json = encode_table(&Table::default(), &WriteOptions::default()).unwrap();
        assert_eq!(json, b"[]");
    }

    #[test]
    fn test_write_atomic_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        std::fs::write(&path, b"old").unwrap();
        write_atomic(&path, b"new").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        // Only the destination remains; no staged temp files
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("data.json");

        let err = write_atomic(&path, b"[]").unwrap_err();
        assert!(matches!(err, IoError::Io { .. }));
        assert!(!path.exists());
    }
}
