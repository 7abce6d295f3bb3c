use escopo_ingest::{IngestOptions, Sheet, ingest_sheets};
use escopo_model::{CanonicalField, SheetStatus};

fn sheet(name: &str, rows: &[&[&str]]) -> Sheet {
    Sheet {
        name: name.to_string(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
    }
}

const HEADER: &[&str] = &[
    "Ano/Série",
    "Bimestre",
    "Habilidade",
    "Objetos do Conhecimento",
    "Conteudo",
];

#[test]
fn round_trip_scenario() {
    let sheets = vec![sheet(
        "Ciências",
        &[
            HEADER,
            &[
                "6º ano",
                "1º Bimestre",
                "EF06CI01",
                "Matéria e energia",
                "Propriedades físicas",
            ],
        ],
    )];
    let report = ingest_sheets(&sheets, "fundamental-2", &IngestOptions::default());
    assert_eq!(report.items.len(), 1);
    let item = &report.items[0];
    assert_eq!(item.subject, "Ciências");
    assert_eq!(item.year, "6");
    assert_eq!(item.term, "1");
    assert_eq!(item.skill_code, "EF06CI01");
    assert_eq!(item.knowledge_object, "Matéria e energia");
    assert_eq!(item.content, "Propriedades físicas");
    assert_eq!(item.objectives, None);
    assert_eq!(report.level, "fundamental-2");
}

#[test]
fn index_sheet_is_excluded_in_any_case() {
    for name in ["Índice", "ÍNDICE", "índice", "  Índice  "] {
        let sheets = vec![sheet(
            name,
            &[
                HEADER,
                &["6º ano", "1º Bimestre", "EF06CI01", "Terra", "Solo"],
            ],
        )];
        let report = ingest_sheets(&sheets, "fundamental-2", &IngestOptions::default());
        assert!(report.is_empty(), "sheet named {name:?} must contribute nothing");
        assert_eq!(report.sheets[0].status, SheetStatus::SkippedIndex);
    }
}

#[test]
fn index_only_workbook_yields_empty_report() {
    let sheets = vec![sheet("Índice", &[&["Disciplinas"], &["Ciências"]])];
    let report = ingest_sheets(&sheets, "medio", &IngestOptions::default());
    assert!(report.is_empty());
    assert!(report.warnings().is_empty());
}

#[test]
fn subject_comes_from_the_worksheet_name() {
    let sheets = vec![sheet(
        "Matemática",
        &[
            HEADER,
            // The cells carry another subject's codes; none of them
            // feed the subject field.
            &["7º ano", "2º Bimestre", "EF07MA01", "Números", "Múltiplos"],
            &["8º ano", "3º Bimestre", "EF08MA02", "Álgebra", "Equações"],
        ],
    )];
    let report = ingest_sheets(&sheets, "fundamental-2", &IngestOptions::default());
    assert_eq!(report.items.len(), 2);
    for item in &report.items {
        assert_eq!(item.subject, "Matemática");
    }
}

#[test]
fn one_bad_sheet_does_not_abort_the_workbook() {
    let sheets = vec![
        sheet(
            "Ciências",
            &[
                HEADER,
                &["6º ano", "1º Bimestre", "EF06CI01", "Terra", "Solo"],
            ],
        ),
        sheet("História", &[&["apenas anotações"], &["sem cabeçalho"]]),
        sheet(
            "Geografia",
            &[
                HEADER,
                &["7º ano", "2º Bimestre", "EF07GE01", "Mapas", "Escalas"],
            ],
        ),
    ];
    let report = ingest_sheets(&sheets, "fundamental-2", &IngestOptions::default());
    assert_eq!(report.items.len(), 2);
    assert_eq!(report.items[0].subject, "Ciências");
    assert_eq!(report.items[1].subject, "Geografia");
    assert_eq!(report.sheets[1].status, SheetStatus::HeaderNotFound);
    let warnings = report.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("História"));
}

#[test]
fn missing_mandatory_columns_name_the_columns() {
    let sheets = vec![sheet(
        "Artes",
        &[
            &["Ano", "Bimestre", "Habilidade"],
            &["6º ano", "1º Bimestre", "EF06AR01"],
        ],
    )];
    let report = ingest_sheets(&sheets, "fundamental-2", &IngestOptions::default());
    assert!(report.is_empty());
    assert_eq!(
        report.sheets[0].status,
        SheetStatus::MissingColumns {
            missing: vec![CanonicalField::KnowledgeObject, CanonicalField::Content],
        }
    );
    let warnings = report.warnings();
    assert!(warnings[0].contains("knowledge object"));
    assert!(warnings[0].contains("content"));
}

#[test]
fn items_keep_sheet_order_then_row_order() {
    let sheets = vec![
        sheet(
            "Ciências",
            &[
                HEADER,
                &["6º ano", "1º Bimestre", "EF06CI01", "Terra", "Solo"],
                &["6º ano", "2º Bimestre", "EF06CI02", "Terra", "Rochas"],
            ],
        ),
        sheet(
            "Matemática",
            &[
                HEADER,
                &["6º ano", "1º Bimestre", "EF06MA01", "Números", "Frações"],
            ],
        ),
    ];
    let report = ingest_sheets(&sheets, "fundamental-2", &IngestOptions::default());
    let codes: Vec<&str> = report
        .items
        .iter()
        .map(|item| item.skill_code.as_str())
        .collect();
    assert_eq!(codes, vec!["EF06CI01", "EF06CI02", "EF06MA01"]);
}

#[test]
fn rejected_rows_are_counted_not_reported_individually() {
    let sheets = vec![sheet(
        "Ciências",
        &[
            HEADER,
            &["6º ano", "1º Bimestre", "EF06CI01", "Terra", "Solo"],
            &["", "", "", "", ""],
            &["6º ano", "1º Bimestre", "", "Terra", "Rochas"],
            &["sexto", "1º Bimestre", "EF06CI03", "Terra", "Relevo"],
        ],
    )];
    let report = ingest_sheets(&sheets, "fundamental-2", &IngestOptions::default());
    assert_eq!(report.items.len(), 1);
    // Two mandatory-incomplete rows; the blank row is not counted.
    assert_eq!(report.rows_skipped(), 2);
    assert_eq!(report.sheets[0].rows_imported, 1);
    assert!(report.warnings().is_empty());
}

#[test]
fn custom_index_sheet_list_is_honored() {
    let options = IngestOptions {
        index_sheets: vec!["índice".to_string(), "sumário".to_string()],
        ..IngestOptions::default()
    };
    let sheets = vec![sheet(
        "Sumário",
        &[
            HEADER,
            &["6º ano", "1º Bimestre", "EF06CI01", "Terra", "Solo"],
        ],
    )];
    let report = ingest_sheets(&sheets, "fundamental-2", &options);
    assert!(report.is_empty());
    assert_eq!(report.sheets[0].status, SheetStatus::SkippedIndex);
}
