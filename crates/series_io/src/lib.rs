//! # series_io: Table Serialisation
//!
//! Encodes rate tables as a JSON array of `{"date", "rate"}` objects and
//! writes files atomically: the full payload is buffered in memory,
//! written to a temporary file beside the destination, then renamed over
//! it. A failed run never leaves a partial file behind.
//!
//! ## Modules
//!
//! - [`format`]: `DateFormat` variants for the `date` field and lenient parsing
//! - [`writer`]: `JsonTable`, `write_table`, `write_atomic`
//! - [`reader`]: `read_table`, `decode_table`
//! - [`error`]: `IoError`

pub mod error;
pub mod format;
pub mod reader;
pub mod writer;

use std::path::{Path, PathBuf};

pub use error::IoError;
pub use format::DateFormat;
pub use reader::{decode_table, read_table};
pub use writer::{encode_table, write_atomic, write_table, JsonTable, WriteOptions};

/// Outcome of a completed file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// Destination path
    pub path: PathBuf,
    /// Payload size in bytes
    pub bytes: usize,
}

/// Trait for file generators
pub trait FileGenerator {
    /// Generate the complete file content
    fn generate(&self) -> Result<Vec<u8>, IoError>;

    /// Write to file atomically
    fn write_to_file(&self, path: &Path) -> Result<WriteSummary, IoError> {
        let content = self.generate()?;
        write_atomic(path, &content)?;
        Ok(WriteSummary {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}
