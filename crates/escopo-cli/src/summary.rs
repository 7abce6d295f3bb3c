use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use escopo_model::{CanonicalField, SheetStatus};

use crate::types::IngestRunResult;

pub fn print_summary(result: &IngestRunResult) {
    println!("Workbook: {}", result.workbook.display());
    println!("Level: {}", result.report.level);
    if let Some(path) = &result.json {
        println!("Items JSON: {}", path.display());
    }
    if let Some(path) = &result.stored {
        println!("Stored: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Status"),
        header_cell("Imported"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for sheet in &result.report.sheets {
        table.add_row(vec![
            Cell::new(&sheet.sheet),
            status_cell(&sheet.status),
            Cell::new(sheet.rows_imported),
            count_cell(sheet.rows_skipped),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.report.items.len()).add_attribute(Attribute::Bold),
        count_cell(result.report.rows_skipped()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let warnings = result.report.warnings();
    if !warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &warnings {
            eprintln!("- {warning}");
        }
    }
    if result.report.is_empty() {
        println!("No valid rows found - check the file format.");
    } else {
        println!(
            "{} items ingested from {} sheets",
            result.report.items.len(),
            result.report.sheets_imported()
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: &SheetStatus) -> Cell {
    match status {
        SheetStatus::Imported => Cell::new("imported").fg(Color::Green),
        SheetStatus::SkippedIndex => dim_cell("index"),
        SheetStatus::HeaderNotFound => Cell::new("no header").fg(Color::Yellow),
        SheetStatus::MissingColumns { missing } => {
            let names: Vec<&str> = missing.iter().map(CanonicalField::as_str).collect();
            Cell::new(format!("missing: {}", names.join(", "))).fg(Color::Yellow)
        }
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
