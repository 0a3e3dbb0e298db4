use super::PreviewRow;
use crate::resolver::Plan;
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;

const PREV_TITLE: &str = "prev";
const NEXT_TITLE: &str = "next";
const ELLIPSIS: &str = "...";

/// Render rows as two aligned text columns.
///
/// Column widths come from the plan so the layout does not shift between the
/// bounded and the full preview of the same plan.
pub fn render_plain(plan: &Plan, rows: &[PreviewRow<'_>], use_color: bool) -> String {
    let prev_len = plan.max_source_len().max(PREV_TITLE.len());
    let next_len = plan.max_destination_len().max(NEXT_TITLE.len());

    let mut output = String::new();

    let header = format!("{:<prev_len$} | {}", PREV_TITLE, NEXT_TITLE);
    if use_color {
        writeln!(output, "{}", AnsiColor::Cyan.bold().paint(header)).unwrap();
    } else {
        writeln!(output, "{}", header).unwrap();
    }
    writeln!(output, "{}-+-{}", "-".repeat(prev_len), "-".repeat(next_len)).unwrap();

    for row in rows {
        match row {
            PreviewRow::Pair(pair) => {
                writeln!(
                    output,
                    "{:<prev_len$} | {}",
                    pair.source().display().to_string(),
                    pair.destination().display()
                )
                .unwrap();
            },
            PreviewRow::Ellipsis { .. } => {
                let line = format!("{:<prev_len$} | {}", ELLIPSIS, ELLIPSIS);
                if use_color {
                    writeln!(output, "{}", AnsiColor::DarkGray.paint(line)).unwrap();
                } else {
                    writeln!(output, "{}", line).unwrap();
                }
            },
        }
    }

    output
}
