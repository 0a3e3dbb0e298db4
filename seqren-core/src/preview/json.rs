use super::PreviewRow;
use crate::resolver::Plan;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(untagged)]
enum JsonRow<'a> {
    Pair {
        source: &'a Path,
        destination: &'a Path,
    },
    Omitted {
        omitted: usize,
    },
}

#[derive(Serialize)]
struct JsonPreview<'a> {
    total: usize,
    rows: Vec<JsonRow<'a>>,
}

/// Render the bounded rows as JSON
pub fn render_json(plan: &Plan, rows: &[PreviewRow<'_>]) -> String {
    let preview = JsonPreview {
        total: plan.len(),
        rows: rows
            .iter()
            .map(|row| match row {
                PreviewRow::Pair(pair) => JsonRow::Pair {
                    source: pair.source(),
                    destination: pair.destination(),
                },
                PreviewRow::Ellipsis { omitted } => JsonRow::Omitted { omitted: *omitted },
            })
            .collect(),
    };
    serde_json::to_string_pretty(&preview).unwrap_or_else(|_| "null".to_string())
}
