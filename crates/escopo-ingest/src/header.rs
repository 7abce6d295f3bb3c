//! Header row detection and canonical column mapping.

use std::collections::BTreeMap;

use escopo_model::{CanonicalField, SynonymTable};

/// Tunables for locating the header row.
///
/// Header position and spelling vary between hand-maintained files, so
/// a fixed row offset is unreliable; the scan accepts the first row in
/// the window where enough mandatory columns match. The match threshold
/// is an empirical heuristic and stays configurable.
#[derive(Debug, Clone, Copy)]
pub struct HeaderScan {
    /// Rows scanned from the top of the sheet.
    pub search_window: usize,
    /// Mandatory fields that must match within a single row.
    pub min_matches: usize,
}

impl Default for HeaderScan {
    fn default() -> Self {
        Self {
            search_window: 10,
            min_matches: 3,
        }
    }
}

/// Index of the first row in the search window that looks like a
/// header, or `None` when no row qualifies.
///
/// A row composed entirely of empty cells is never a candidate.
pub fn locate_header_row(
    rows: &[Vec<String>],
    synonyms: &SynonymTable,
    scan: HeaderScan,
) -> Option<usize> {
    let window = rows.len().min(scan.search_window);
    for (index, row) in rows.iter().take(window).enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if mandatory_matches(row, synonyms) >= scan.min_matches {
            return Some(index);
        }
    }
    None
}

/// Count how many distinct mandatory fields have a matching cell.
fn mandatory_matches(row: &[String], synonyms: &SynonymTable) -> usize {
    CanonicalField::MANDATORY
        .iter()
        .filter(|field| {
            row.iter()
                .any(|cell| synonyms.field_for(cell) == Some(**field))
        })
        .count()
}

/// Canonical field -> column index for one located header row.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    columns: BTreeMap<CanonicalField, usize>,
}

impl HeaderMap {
    /// Map header cells to canonical fields; first match wins per field.
    ///
    /// # Errors
    ///
    /// The mandatory fields with no matching column, when any are
    /// absent. The optional objectives column maps to nothing without
    /// error.
    pub fn from_row(
        cells: &[String],
        synonyms: &SynonymTable,
    ) -> std::result::Result<Self, Vec<CanonicalField>> {
        let mut columns = BTreeMap::new();
        for (index, cell) in cells.iter().enumerate() {
            if let Some(field) = synonyms.field_for(cell) {
                columns.entry(field).or_insert(index);
            }
        }
        let missing: Vec<CanonicalField> = CanonicalField::MANDATORY
            .iter()
            .copied()
            .filter(|field| !columns.contains_key(field))
            .collect();
        if missing.is_empty() {
            Ok(Self { columns })
        } else {
            Err(missing)
        }
    }

    /// Column index for a field, if the sheet has it.
    pub fn column(&self, field: CanonicalField) -> Option<usize> {
        self.columns.get(&field).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn locates_header_past_title_and_decoy_rows() {
        let rows = vec![
            row(&["Escopo e Sequência 2024", "", "", "", ""]),
            // Decoy: two mandatory matches are below the threshold.
            row(&["Ano", "Bimestre", "", "", ""]),
            row(&["", "", "", "", ""]),
            row(&[
                "Ano/Série",
                "BIMESTRE",
                "Habilidade",
                "Objetos do Conhecimento",
                "Conteudo",
            ]),
            row(&["6º ano", "1º Bimestre", "EF06CI01", "Terra", "Solo"]),
        ];
        let found = locate_header_row(&rows, &SynonymTable::default(), HeaderScan::default());
        assert_eq!(found, Some(3));
    }

    #[test]
    fn three_of_five_is_enough_in_any_order_and_casing() {
        let rows = vec![row(&["conteudo", "HABILIDADES", "bimestre"])];
        let found = locate_header_row(&rows, &SynonymTable::default(), HeaderScan::default());
        assert_eq!(found, Some(0));
    }

    #[test]
    fn empty_rows_are_never_candidates() {
        let rows = vec![row(&["", "  ", ""]), row(&["Ano", "Bimestre", "Conteudo"])];
        let found = locate_header_row(&rows, &SynonymTable::default(), HeaderScan::default());
        assert_eq!(found, Some(1));
    }

    #[test]
    fn no_header_inside_window() {
        let mut rows = vec![row(&["notas", "da", "coordenação"]); 12];
        rows.push(row(&[
            "Ano",
            "Bimestre",
            "Habilidade",
            "Objetos do Conhecimento",
            "Conteudo",
        ]));
        // Header exists at row 12, outside the default 10-row window.
        let found = locate_header_row(&rows, &SynonymTable::default(), HeaderScan::default());
        assert_eq!(found, None);
    }

    #[test]
    fn threshold_is_configurable() {
        let rows = vec![row(&["Ano", "Bimestre"])];
        let synonyms = SynonymTable::default();
        assert_eq!(
            locate_header_row(&rows, &synonyms, HeaderScan::default()),
            None
        );
        let relaxed = HeaderScan {
            min_matches: 2,
            ..HeaderScan::default()
        };
        assert_eq!(locate_header_row(&rows, &synonyms, relaxed), Some(0));
    }

    #[test]
    fn maps_all_columns_in_sheet_order() {
        let cells = row(&[
            "Bimestre",
            "Ano/Série",
            "Conteúdo",
            "Objetos do Conhecimento",
            "Habilidade",
            "Objetivos",
        ]);
        let map = HeaderMap::from_row(&cells, &SynonymTable::default()).expect("map header");
        assert_eq!(map.column(CanonicalField::Term), Some(0));
        assert_eq!(map.column(CanonicalField::Year), Some(1));
        assert_eq!(map.column(CanonicalField::Content), Some(2));
        assert_eq!(map.column(CanonicalField::KnowledgeObject), Some(3));
        assert_eq!(map.column(CanonicalField::Skill), Some(4));
        assert_eq!(map.column(CanonicalField::Objectives), Some(5));
    }

    #[test]
    fn first_match_wins_for_duplicate_headers() {
        let cells = row(&["Ano", "Série", "Bimestre", "Habilidade", "Objeto do Conhecimento", "Conteudo"]);
        let map = HeaderMap::from_row(&cells, &SynonymTable::default()).expect("map header");
        assert_eq!(map.column(CanonicalField::Year), Some(0));
    }

    #[test]
    fn missing_mandatory_columns_are_reported() {
        let cells = row(&["Ano", "Bimestre", "Habilidade"]);
        let missing =
            HeaderMap::from_row(&cells, &SynonymTable::default()).expect_err("incomplete header");
        assert_eq!(
            missing,
            vec![CanonicalField::KnowledgeObject, CanonicalField::Content]
        );
    }

    #[test]
    fn absent_objectives_column_is_not_an_error() {
        let cells = row(&[
            "Ano",
            "Bimestre",
            "Habilidade",
            "Objetos do Conhecimento",
            "Conteudo",
        ]);
        let map = HeaderMap::from_row(&cells, &SynonymTable::default()).expect("map header");
        assert_eq!(map.column(CanonicalField::Objectives), None);
    }
}
