use comfy_table::{Attribute, Cell, Color, Table};

use super::{BadgeStyle, Column, TableView, marker_glyph};
use crate::record::models::Severity;

pub fn render(view: &TableView<'_>) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!("=== {} ===\n", view.header.title));
    output.push_str(&format!("{}\n", view.header.subtitle));
    output.push_str(&format!(
        "Last updated: {} | {} records\n\n",
        view.header.last_updated, view.header.record_count
    ));

    let mut table = Table::new();
    table.set_header(view.columns.clone());

    // Messages surface below the table, keyed by the marker in the cell.
    let mut notes = Vec::new();

    for row in &view.rows {
        let mut cells: Vec<Cell> = row
            .cells
            .iter()
            .zip(Column::ALL)
            .map(|(c, column)| match c.marker {
                Some(severity) => {
                    if let (Some(msg), Some(field)) = (&c.message, column.error_field()) {
                        notes.push((row.id, field, severity, msg.clone()));
                    }
                    marked_cell(&c.text, severity)
                }
                None => Cell::new(&c.text),
            })
            .collect();
        cells.push(badge_cell(&row.status.label, row.status.style));
        table.add_row(cells);
    }

    output.push_str(&table.to_string());
    output.push('\n');

    if !notes.is_empty() {
        output.push_str("\n--- Errors ---\n");
        for (id, field, severity, msg) in notes {
            output.push_str(&format!(
                "{} #{id} {field} {}: {msg}\n",
                marker_glyph(severity),
                severity.as_str()
            ));
        }
    }

    Ok(output)
}

pub(crate) fn marked_cell(text: &str, severity: Severity) -> Cell {
    let cell = Cell::new(format!("{} {text}", marker_glyph(severity)));
    match severity {
        Severity::Critical => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        Severity::Warning => cell.fg(Color::Yellow),
    }
}

pub(crate) fn badge_cell(label: &str, style: BadgeStyle) -> Cell {
    let cell = Cell::new(label);
    match style {
        BadgeStyle::Positive => cell.fg(Color::Green),
        BadgeStyle::Cautionary => cell.fg(Color::Yellow),
        BadgeStyle::Neutral => cell.fg(Color::Grey),
    }
}
