use std::io;
use std::path::{Path, PathBuf};

use super::Column;
use crate::error::AppError;
use crate::record::models::Record;

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Render records as CSV: a header row, then one line per record in input order.
/// Values with commas, quotes or line breaks are quoted per RFC 4180.
pub fn render(records: &[Record]) -> Result<String, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(Column::ALL.iter().map(|c| c.label()))?;
    for record in records {
        writer.write_record(Column::ALL.iter().map(|c| c.value(record)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write the export into `dir` and return the path of the written file.
pub fn export(records: &[Record], dir: &Path, file_name: &str) -> Result<PathBuf, AppError> {
    let content = render(records)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, content.as_bytes())?;
    tracing::info!(
        "Exported {} record(s) to {} ({})",
        records.len(),
        path.display(),
        CSV_MIME
    );
    Ok(path)
}
