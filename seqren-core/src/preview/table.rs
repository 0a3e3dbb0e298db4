use super::PreviewRow;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render rows as a bordered table
pub fn render_table(rows: &[PreviewRow<'_>], use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("prev").fg(Color::Cyan),
            Cell::new("next").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["prev", "next"]);
    }

    for row in rows {
        match row {
            PreviewRow::Pair(pair) => {
                let from = pair.source().display().to_string();
                let to = pair.destination().display().to_string();
                if use_color {
                    table.add_row(vec![Cell::new(from), Cell::new(to).fg(Color::Magenta)]);
                } else {
                    table.add_row(vec![from, to]);
                }
            },
            PreviewRow::Ellipsis { omitted } => {
                let note = format!("... ({omitted} more)");
                if use_color {
                    table.add_row(vec![
                        Cell::new(note).fg(Color::DarkGrey),
                        Cell::new("...").fg(Color::DarkGrey),
                    ]);
                } else {
                    table.add_row(vec![note, "...".to_string()]);
                }
            },
        }
    }

    table.to_string()
}
