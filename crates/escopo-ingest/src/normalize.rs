//! Row normalization.

use escopo_model::{CanonicalField, ScopeSequenceItem};

use crate::header::HeaderMap;

/// What became of one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row produced a complete item.
    Item(ScopeSequenceItem),
    /// A mandatory field was empty after extraction; the row is dropped.
    Rejected,
    /// Every cell was empty; skipped before extraction, not counted as
    /// rejected.
    Blank,
}

/// First contiguous run of ASCII digits, or empty when there is none.
///
/// "8º ano" -> "8"; "Bimestre nº 2 - revisado" -> "2". Multi-number
/// cells ("6 e 7") yield only the first run.
pub fn extract_digits(text: &str) -> String {
    text.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect()
}

/// Normalize one data row beneath the header.
///
/// `subject` is the worksheet name; it is never read from a cell.
pub fn normalize_row(subject: &str, row: &[String], columns: &HeaderMap) -> RowOutcome {
    if row.iter().all(|cell| cell.trim().is_empty()) {
        return RowOutcome::Blank;
    }
    let year = extract_digits(field_text(row, columns, CanonicalField::Year));
    let term = extract_digits(field_text(row, columns, CanonicalField::Term));
    let skill_code = field_text(row, columns, CanonicalField::Skill).trim();
    let knowledge_object = field_text(row, columns, CanonicalField::KnowledgeObject).trim();
    let content = field_text(row, columns, CanonicalField::Content).trim();
    if year.is_empty()
        || term.is_empty()
        || skill_code.is_empty()
        || knowledge_object.is_empty()
        || content.is_empty()
    {
        return RowOutcome::Rejected;
    }
    let objectives = match field_text(row, columns, CanonicalField::Objectives).trim() {
        "" => None,
        text => Some(text.to_string()),
    };
    RowOutcome::Item(ScopeSequenceItem {
        subject: subject.trim().to_string(),
        year,
        term,
        skill_code: skill_code.to_string(),
        knowledge_object: knowledge_object.to_string(),
        content: content.to_string(),
        objectives,
    })
}

/// The cell text for a mapped field; `""` when the column is unmapped
/// or the row is short.
fn field_text<'a>(row: &'a [String], columns: &HeaderMap, field: CanonicalField) -> &'a str {
    columns
        .column(field)
        .and_then(|index| row.get(index))
        .map(String::as_str)
        .unwrap_or("")
}
