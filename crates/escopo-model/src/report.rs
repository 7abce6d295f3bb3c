//! Ingestion outcome reporting.
//!
//! The two recoverable failure tiers (per-sheet, per-row) are tagged
//! variants absorbed into the report; only an unparseable buffer is
//! ever raised as an error.

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;
use crate::item::ScopeSequenceItem;

/// How one worksheet fared during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SheetStatus {
    /// Header located, rows normalized.
    Imported,
    /// Worksheet name matched the index-sheet convention.
    SkippedIndex,
    /// No row inside the search window matched enough mandatory columns.
    HeaderNotFound,
    /// A header row was located but mandatory columns were absent.
    MissingColumns { missing: Vec<CanonicalField> },
}

/// Per-worksheet ingestion outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetReport {
    /// Worksheet name, trimmed.
    pub sheet: String,
    #[serde(flatten)]
    pub status: SheetStatus,
    /// Rows that produced an item.
    pub rows_imported: usize,
    /// Rows dropped for incomplete mandatory data. Blank rows are not
    /// counted.
    pub rows_skipped: usize,
}

impl SheetReport {
    /// A report for a worksheet that contributed zero items.
    pub fn skipped(sheet: impl Into<String>, status: SheetStatus) -> Self {
        Self {
            sheet: sheet.into(),
            status,
            rows_imported: 0,
            rows_skipped: 0,
        }
    }

    /// Operator-visible diagnostic for a skipped worksheet, if any.
    ///
    /// Index sheets are skipped by convention and produce no warning.
    pub fn warning(&self) -> Option<String> {
        match &self.status {
            SheetStatus::Imported | SheetStatus::SkippedIndex => None,
            SheetStatus::HeaderNotFound => Some(format!(
                "sheet '{}': no header row found in the search window",
                self.sheet
            )),
            SheetStatus::MissingColumns { missing } => {
                let names: Vec<&str> = missing.iter().map(CanonicalField::as_str).collect();
                Some(format!(
                    "sheet '{}': missing mandatory columns: {}",
                    self.sheet,
                    names.join(", ")
                ))
            }
        }
    }
}

/// The full result of ingesting one workbook.
///
/// An empty report is not an error; the caller decides whether "zero
/// items ingested" is surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    /// Caller-supplied education level label, passed through opaquely
    /// for downstream grouping.
    pub level: String,
    /// Accepted items, in workbook sheet order then row order.
    pub items: Vec<ScopeSequenceItem>,
    /// One report per worksheet, in workbook order.
    pub sheets: Vec<SheetReport>,
}

impl IngestReport {
    /// Returns true when no worksheet produced an item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Worksheets that produced items.
    pub fn sheets_imported(&self) -> usize {
        self.sheets
            .iter()
            .filter(|report| report.status == SheetStatus::Imported)
            .count()
    }

    /// Aggregate count of rows dropped for incomplete mandatory data.
    pub fn rows_skipped(&self) -> usize {
        self.sheets.iter().map(|report| report.rows_skipped).sum()
    }

    /// Diagnostics for worksheets that contributed zero items.
    pub fn warnings(&self) -> Vec<String> {
        self.sheets
            .iter()
            .filter_map(SheetReport::warning)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_and_warnings() {
        let report = IngestReport {
            level: "fundamental-2".to_string(),
            items: Vec::new(),
            sheets: vec![
                SheetReport {
                    sheet: "Matemática".to_string(),
                    status: SheetStatus::Imported,
                    rows_imported: 12,
                    rows_skipped: 3,
                },
                SheetReport::skipped("Índice", SheetStatus::SkippedIndex),
                SheetReport::skipped("História", SheetStatus::HeaderNotFound),
                SheetReport::skipped(
                    "Geografia",
                    SheetStatus::MissingColumns {
                        missing: vec![CanonicalField::Term, CanonicalField::Content],
                    },
                ),
            ],
        };
        assert_eq!(report.sheets_imported(), 1);
        assert_eq!(report.rows_skipped(), 3);
        let warnings = report.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("História"));
        assert!(warnings[1].contains("term, content"));
    }

    #[test]
    fn sheet_report_serializes_flat_status() {
        let report = SheetReport::skipped(
            "Artes",
            SheetStatus::MissingColumns {
                missing: vec![CanonicalField::Skill],
            },
        );
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["sheet"], "Artes");
        assert_eq!(json["status"], "missingColumns");
        assert_eq!(json["missing"][0], "skill");
    }
}
