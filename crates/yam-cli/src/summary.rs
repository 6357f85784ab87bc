//! Terminal summary output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::types::ImportResult;

/// Prints the end-of-run summary table.
pub fn print_summary(result: &ImportResult) {
    println!("Input: {}", result.input.display());
    println!("Source: {} (strategy: {})", result.source, result.strategy);
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: none written"),
    }

    let mut table = Table::new();
    table.set_header(vec!["Rows read", "Rows mapped", "Rows dropped"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.rows_read),
        Cell::new(result.rows_mapped),
        Cell::new(result.rows_dropped()),
    ]);
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }
    println!("{table}");
}

/// Shared table styling for summary and listing output.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
