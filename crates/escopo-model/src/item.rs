use serde::{Deserialize, Serialize};

/// One normalized scope-and-sequence record.
///
/// Items are immutable value records produced fresh on each ingestion;
/// identity is positional. Wire names follow the upstream application's
/// camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeSequenceItem {
    /// Subject, derived from the worksheet name, never from a cell.
    pub subject: String,
    /// Year or grade, digits only ("6º ano" -> "6").
    pub year: String,
    /// Bimester, digits only ("1º Bimestre" -> "1").
    pub term: String,
    /// Skill code, trimmed raw text (e.g. "EF06CI01").
    pub skill_code: String,
    /// Knowledge object, trimmed raw text.
    pub knowledge_object: String,
    /// Content description, trimmed raw text.
    pub content: String,
    /// Learning objectives; absent when the column is missing or the
    /// cell is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objectives: Option<String>,
}

impl ScopeSequenceItem {
    /// Returns true when every mandatory field is non-empty.
    ///
    /// The ingestion pipeline only emits complete items; this exists for
    /// callers that deserialize items from elsewhere.
    pub fn is_complete(&self) -> bool {
        !self.subject.is_empty()
            && !self.year.is_empty()
            && !self.term.is_empty()
            && !self.skill_code.is_empty()
            && !self.knowledge_object.is_empty()
            && !self.content.is_empty()
    }
}
