use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csviewer_ingest::{DataPool, SourceCatalog};
use csviewer_model::CellValue;

use crate::commands::PlotOutcome;

/// Renders one block per source: detection result, then a preview table.
pub fn inspect_report(catalog: &SourceCatalog, pool: &DataPool, rows: usize) -> String {
    let mut out = String::new();
    for record in catalog.records() {
        let Some(table) = pool.get(record.id) else {
            continue;
        };
        out.push_str(&format!(
            "Source {}: {}\n",
            record.id,
            record.location().display()
        ));
        out.push_str(&format!(
            "Header: {}   Columns: {}   Rows: {}\n",
            if table.header_detected() {
                "detected"
            } else {
                "none (positional names)"
            },
            table.width(),
            table.height()
        ));
        let mut preview = Table::new();
        preview.set_header(
            table
                .columns()
                .iter()
                .map(|column| header_cell(column.as_str()))
                .collect::<Vec<_>>(),
        );
        apply_table_style(&mut preview);
        for row in table.rows().iter().take(rows) {
            preview.add_row(row.cells().iter().map(value_cell).collect::<Vec<_>>());
        }
        out.push_str(&format!("{preview}\n"));
        if table.height() > rows {
            out.push_str(&format!("... {} more row(s)\n", table.height() - rows));
        }
        out.push('\n');
    }
    out
}

/// Renders the dataset table and exclusion count of a finished plot.
pub fn plot_report(outcome: &PlotOutcome) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Source"),
        header_cell("X"),
        header_cell("Y"),
        header_cell("Label"),
        header_cell("Points"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for (offset, series) in outcome.configuration.datasets().iter().enumerate() {
        table.add_row(vec![
            Cell::new(offset + 1),
            Cell::new(series.source()),
            Cell::new(series.x_field()),
            Cell::new(series.y_field()),
            if series.label().is_empty() {
                dim_cell("-")
            } else {
                Cell::new(series.label())
            },
            Cell::new(series.len()),
        ]);
    }
    let mut out = format!("{table}\n");
    if !outcome.excluded.is_empty() {
        out.push_str(&format!(
            "{} cell(s) were not numeric and their rows were left out (see warnings)\n",
            outcome.excluded.len()
        ));
    }
    if outcome.copied {
        out.push_str("Figure copied.\n");
    }
    out
}

fn apply_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Missing => dim_cell(""),
        CellValue::Number(_) => Cell::new(value).set_alignment(CellAlignment::Right),
        CellValue::Text(_) => Cell::new(value),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
