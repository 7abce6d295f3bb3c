//! Header synonym configuration.
//!
//! Spreadsheets are hand-maintained; header text varies between files
//! and between worksheets of the same file. The accepted spellings per
//! canonical field are configuration data, not logic: the built-in
//! table carries the Portuguese curriculum vocabulary, and deployments
//! can load their own from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// Accepted header spellings per canonical field.
///
/// Matching is exact after trimming, case-insensitive (Unicode
/// lowercase, so "CONTEÚDO" matches "Conteúdo").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    headers: BTreeMap<CanonicalField, Vec<String>>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            CanonicalField::Year,
            vec![
                "ANO/SÉRIE".to_string(),
                "Ano".to_string(),
                "Série".to_string(),
            ],
        );
        headers.insert(CanonicalField::Term, vec!["BIMESTRE".to_string()]);
        headers.insert(
            CanonicalField::Skill,
            vec!["HABILIDADE".to_string(), "Habilidades".to_string()],
        );
        headers.insert(
            CanonicalField::KnowledgeObject,
            vec![
                "OBJETOS DO CONHECIMENTO".to_string(),
                "Objeto do Conhecimento".to_string(),
            ],
        );
        headers.insert(
            CanonicalField::Content,
            vec!["CONTEUDO".to_string(), "Conteúdo".to_string()],
        );
        headers.insert(CanonicalField::Objectives, vec!["OBJETIVOS".to_string()]);
        Self { headers }
    }
}

impl SynonymTable {
    /// Create a table from explicit per-field spellings.
    pub fn new(headers: BTreeMap<CanonicalField, Vec<String>>) -> Self {
        Self { headers }
    }

    /// The canonical field a header cell names, if any.
    ///
    /// An empty or whitespace-only cell never matches.
    pub fn field_for(&self, header: &str) -> Option<CanonicalField> {
        let needle = normalize_header(header);
        if needle.is_empty() {
            return None;
        }
        for (field, names) in &self.headers {
            if names.iter().any(|name| normalize_header(name) == needle) {
                return Some(*field);
            }
        }
        None
    }

    /// Accepted spellings for a field, as configured.
    pub fn headers_for(&self, field: CanonicalField) -> &[String] {
        self.headers.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mandatory fields with no configured spelling.
    ///
    /// A loaded table missing one of these can never locate a header
    /// row; callers should surface this before ingesting.
    pub fn missing_mandatory(&self) -> Vec<CanonicalField> {
        CanonicalField::MANDATORY
            .iter()
            .copied()
            .filter(|field| self.headers_for(*field).is_empty())
            .collect()
    }
}

/// Normalizes a header cell for comparison: trim, Unicode lowercase.
fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}
