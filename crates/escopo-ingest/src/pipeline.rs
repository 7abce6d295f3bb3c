//! Per-workbook orchestration.

use escopo_model::{IngestReport, ScopeSequenceItem, SheetReport, SheetStatus, SynonymTable};
use tracing::{debug, warn};

use crate::error::Result;
use crate::header::{HeaderMap, HeaderScan, locate_header_row};
use crate::normalize::{RowOutcome, normalize_row};
use crate::workbook::{Sheet, Workbook};

/// Knobs for one ingestion run.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Accepted header spellings per canonical field.
    pub synonyms: SynonymTable,
    /// Header row detection tunables.
    pub scan: HeaderScan,
    /// Worksheet names excluded as table-of-contents sheets, compared
    /// trimmed and case-insensitively.
    pub index_sheets: Vec<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            synonyms: SynonymTable::default(),
            scan: HeaderScan::default(),
            index_sheets: vec!["índice".to_string()],
        }
    }
}

impl IngestOptions {
    fn is_index_sheet(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.index_sheets
            .iter()
            .any(|excluded| excluded.trim().to_lowercase() == needle)
    }
}

/// Ingest a workbook buffer into normalized items.
///
/// `level` is the caller-supplied education level label; it is carried
/// through opaquely for downstream grouping, never read from the file.
///
/// # Errors
///
/// Only when the buffer is not a parseable workbook. Worksheet- and
/// row-level failures are absorbed into the report.
pub fn ingest_workbook(buffer: &[u8], level: &str, options: &IngestOptions) -> Result<IngestReport> {
    let workbook = Workbook::from_bytes(buffer)?;
    Ok(ingest_sheets(&workbook.sheets, level, options))
}

/// Ingest already-read worksheets. Infallible: every failure below the
/// workbook container is reported, not raised.
///
/// Item order is workbook sheet order, then row order within each
/// sheet.
pub fn ingest_sheets(sheets: &[Sheet], level: &str, options: &IngestOptions) -> IngestReport {
    let mut items = Vec::new();
    let mut reports = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let report = ingest_sheet(sheet, options, &mut items);
        if let Some(message) = report.warning() {
            warn!(sheet = %report.sheet, "{message}");
        }
        reports.push(report);
    }
    debug!(
        level,
        items = items.len(),
        sheets = reports.len(),
        "workbook ingested"
    );
    IngestReport {
        level: level.to_string(),
        items,
        sheets: reports,
    }
}

fn ingest_sheet(
    sheet: &Sheet,
    options: &IngestOptions,
    items: &mut Vec<ScopeSequenceItem>,
) -> SheetReport {
    let subject = sheet.name.trim();
    if options.is_index_sheet(&sheet.name) {
        debug!(sheet = subject, "skipping index sheet");
        return SheetReport::skipped(subject, SheetStatus::SkippedIndex);
    }
    let Some(header_index) = locate_header_row(&sheet.rows, &options.synonyms, options.scan) else {
        return SheetReport::skipped(subject, SheetStatus::HeaderNotFound);
    };
    let columns = match HeaderMap::from_row(&sheet.rows[header_index], &options.synonyms) {
        Ok(columns) => columns,
        Err(missing) => return SheetReport::skipped(subject, SheetStatus::MissingColumns { missing }),
    };
    let mut rows_imported = 0usize;
    let mut rows_skipped = 0usize;
    for row in &sheet.rows[header_index + 1..] {
        match normalize_row(subject, row, &columns) {
            RowOutcome::Item(item) => {
                items.push(item);
                rows_imported += 1;
            }
            RowOutcome::Rejected => rows_skipped += 1,
            RowOutcome::Blank => {}
        }
    }
    debug!(sheet = subject, rows_imported, rows_skipped, "sheet ingested");
    SheetReport {
        sheet: subject.to_string(),
        status: SheetStatus::Imported,
        rows_imported,
        rows_skipped,
    }
}
