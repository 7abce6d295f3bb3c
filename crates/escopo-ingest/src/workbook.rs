//! Workbook reading via calamine.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx};

use crate::error::{IngestError, Result};

/// One worksheet, flattened to rows of display text.
///
/// Rows cover the sheet's used range; blank cells render as `""` and
/// every row is padded to the range width, so column indices stay
/// consistent between the header row and the data rows beneath it.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Worksheet tab name, as stored in the workbook.
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// An opened workbook: every worksheet in file order.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Open a workbook from an in-memory `.xlsx` buffer.
    ///
    /// # Errors
    ///
    /// [`IngestError::MalformedWorkbook`] when the buffer is not a
    /// parseable spreadsheet container. This is the only fatal failure
    /// of the ingestion pipeline.
    pub fn from_bytes(buffer: &[u8]) -> Result<Self> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(buffer))
            .map_err(|e| IngestError::MalformedWorkbook(e.to_string()))?;
        let names = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| IngestError::MalformedWorkbook(format!("sheet '{name}': {e}")))?;
            let rows = range_rows(&range);
            sheets.push(Sheet { name, rows });
        }
        Ok(Self { sheets })
    }

    /// Read a workbook file and open it.
    pub fn open(path: &Path) -> Result<Self> {
        let buffer = std::fs::read(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&buffer)
    }
}

fn range_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect()
}

/// Render a cell to the text a user would see in the sheet.
///
/// Whole-number floats collapse to integer form ("6", not "6.0") so
/// numeric year/term cells extract the same digits as text cells.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERROR: {:?}", e),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
