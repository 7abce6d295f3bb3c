use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical columns of a scope-and-sequence worksheet.
///
/// The first five are mandatory: a record missing any of them is not
/// emitted. `Objectives` is optional and may be absent from a sheet
/// entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    /// Year or grade ("6º ano" -> "6"); digits extracted.
    Year,
    /// Bimester ("1º Bimestre" -> "1"); digits extracted.
    Term,
    /// Skill code, e.g. "EF06CI01".
    Skill,
    /// Knowledge object ("objeto do conhecimento").
    KnowledgeObject,
    /// Content description.
    Content,
    /// Learning objectives; the only optional column.
    Objectives,
}

impl CanonicalField {
    /// The fields every emitted record must carry non-empty.
    pub const MANDATORY: [CanonicalField; 5] = [
        CanonicalField::Year,
        CanonicalField::Term,
        CanonicalField::Skill,
        CanonicalField::KnowledgeObject,
        CanonicalField::Content,
    ];

    /// All fields, in worksheet-conventional order.
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::Year,
        CanonicalField::Term,
        CanonicalField::Skill,
        CanonicalField::KnowledgeObject,
        CanonicalField::Content,
        CanonicalField::Objectives,
    ];

    /// Returns true if a record missing this field must be dropped.
    pub fn is_mandatory(&self) -> bool {
        !matches!(self, CanonicalField::Objectives)
    }

    /// Returns true if the field value is a digit run extracted from
    /// free text rather than the trimmed cell text.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CanonicalField::Year | CanonicalField::Term)
    }

    /// Canonical name used in diagnostics and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Year => "year",
            CanonicalField::Term => "term",
            CanonicalField::Skill => "skill",
            CanonicalField::KnowledgeObject => "knowledge object",
            CanonicalField::Content => "content",
            CanonicalField::Objectives => "objectives",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = String;

    /// Parse a canonical field name (case-insensitive, with/without spaces).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "YEAR" => Ok(CanonicalField::Year),
            "TERM" => Ok(CanonicalField::Term),
            "SKILL" => Ok(CanonicalField::Skill),
            "KNOWLEDGE OBJECT" | "KNOWLEDGEOBJECT" => Ok(CanonicalField::KnowledgeObject),
            "CONTENT" => Ok(CanonicalField::Content),
            "OBJECTIVES" => Ok(CanonicalField::Objectives),
            _ => Err(format!("Unknown canonical field: {}", s)),
        }
    }
}
