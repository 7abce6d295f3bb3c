use std::path::PathBuf;

use thiserror::Error;

/// Errors from workbook ingestion.
///
/// Only a buffer that cannot be opened as a spreadsheet container is
/// fatal. Worksheet-level problems (no header row, missing columns) and
/// row-level problems (incomplete mandatory data) are absorbed into the
/// returned [`escopo_model::IngestReport`] instead of raised here.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("malformed workbook: {0}")]
    MalformedWorkbook(String),
    #[error("read workbook {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
