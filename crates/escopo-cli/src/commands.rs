use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use escopo_ingest::{IngestOptions, Workbook, ingest_sheets};
use escopo_model::{CanonicalField, SynonymTable};
use escopo_store::ScopeStore;

use crate::cli::{FieldsArgs, IngestArgs, LevelsArgs};
use crate::summary::apply_table_style;
use crate::types::IngestRunResult;

pub fn run_ingest(args: &IngestArgs) -> Result<IngestRunResult> {
    let span = info_span!("ingest", level = %args.level, workbook = %args.workbook.display());
    let _guard = span.enter();

    let synonyms = load_synonyms(args.synonyms.as_deref())?;
    let missing = synonyms.missing_mandatory();
    if !missing.is_empty() {
        warn!(
            ?missing,
            "synonym table has no spellings for some mandatory columns"
        );
    }

    let mut options = IngestOptions {
        synonyms,
        ..IngestOptions::default()
    };
    if let Some(min_matches) = args.min_matches {
        options.scan.min_matches = min_matches;
    }
    if let Some(window) = args.search_window {
        options.scan.search_window = window;
    }

    let workbook = Workbook::open(&args.workbook)
        .with_context(|| format!("open workbook: {}", args.workbook.display()))?;
    let report = ingest_sheets(&workbook.sheets, &args.level, &options);
    info!(
        items = report.items.len(),
        sheets = report.sheets.len(),
        rows_skipped = report.rows_skipped(),
        "workbook processed"
    );

    let mut json = None;
    let mut stored = None;
    if !args.dry_run {
        if let Some(path) = &args.json {
            let contents =
                serde_json::to_string_pretty(&report.items).context("serialize items")?;
            fs::write(path, contents)
                .with_context(|| format!("write items to {}", path.display()))?;
            json = Some(path.clone());
        }
        if let Some(dir) = &args.store_dir {
            let store = ScopeStore::new(dir)?;
            stored = Some(store.replace_level(&report.level, &report.items)?);
        }
    }

    Ok(IngestRunResult {
        workbook: args.workbook.clone(),
        report,
        json,
        stored,
    })
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let synonyms = load_synonyms(args.synonyms.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Field", "Required", "Accepted headers"]);
    apply_table_style(&mut table);
    for field in CanonicalField::ALL {
        let required = if field.is_mandatory() { "yes" } else { "no" };
        table.add_row(vec![
            field.to_string(),
            required.to_string(),
            synonyms.headers_for(field).join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_levels(args: &LevelsArgs) -> Result<()> {
    let store = ScopeStore::new(&args.store_dir)?;
    let levels = store.list()?;
    if levels.is_empty() {
        println!("No stored levels in {}", args.store_dir.display());
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["Level", "Items", "File"]);
    apply_table_style(&mut table);
    for level in levels {
        table.add_row(vec![
            level.level,
            level.item_count.to_string(),
            level.file_path.display().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_synonyms(path: Option<&Path>) -> Result<SynonymTable> {
    match path {
        None => Ok(SynonymTable::default()),
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read synonyms: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("parse synonyms: {}", path.display()))
        }
    }
}
