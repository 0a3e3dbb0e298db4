mod json;
mod plain;
mod table;

pub use json::render_json;
pub use plain::render_plain;
pub use table::render_table;

use crate::error::Result;
use crate::resolver::{Plan, RenamePair};
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preview {
    /// Aligned `prev | next` text columns
    #[default]
    Plain,
    Table,
    Json,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// One line of a bounded preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewRow<'a> {
    Pair(&'a RenamePair),
    /// Stands in for `omitted` pairs between the head and the last row.
    Ellipsis { omitted: usize },
}

/// Pick the rows to show for a plan.
///
/// With no limit, or a plan that fits, every pair is shown. Otherwise the
/// first `max_rows - 1` pairs, an ellipsis and the last pair, so both ends
/// of a long plan stay visible. The ellipsis is left out when it would hide
/// nothing.
pub fn visible_rows(plan: &Plan, max_rows: Option<usize>) -> Vec<PreviewRow<'_>> {
    let pairs = plan.pairs();
    match max_rows {
        Some(max_rows) if pairs.len() > max_rows => {
            let head = max_rows.saturating_sub(1);
            let omitted = pairs.len() - head - 1;
            let mut rows: Vec<PreviewRow<'_>> = pairs[..head].iter().map(PreviewRow::Pair).collect();
            if omitted > 0 {
                rows.push(PreviewRow::Ellipsis { omitted });
            }
            if let Some(last) = pairs.last() {
                rows.push(PreviewRow::Pair(last));
            }
            rows
        },
        _ => pairs.iter().map(PreviewRow::Pair).collect(),
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    use_color.unwrap_or_else(|| io::stdout().is_terminal())
}

/// Render the bounded preview in the given format.
pub fn render_preview(
    plan: &Plan,
    format: Preview,
    max_rows: Option<usize>,
    use_color: Option<bool>,
) -> String {
    let rows = visible_rows(plan, max_rows);
    let use_color = should_use_color(use_color);

    match format {
        Preview::Plain => render_plain(plan, &rows, use_color),
        Preview::Table => render_table(&rows, use_color),
        Preview::Json => render_json(plan, &rows),
        Preview::None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::testing::MemFs;
    use crate::resolver::resolve;
    use crate::template::NameTemplate;
    use std::path::Path;

    pub(super) fn plan_of(count: usize) -> Plan {
        let files: Vec<String> = (0..count).map(|i| format!("file{i}.txt")).collect();
        let fs = MemFs::with_files(files.iter());
        let template = NameTemplate::new("doc", 2).unwrap();
        resolve(&fs, &files, Path::new("."), &template).unwrap()
    }

    fn sources(rows: &[PreviewRow<'_>]) -> Vec<String> {
        rows.iter()
            .map(|row| match row {
                PreviewRow::Pair(pair) => pair.source().display().to_string(),
                PreviewRow::Ellipsis { .. } => "...".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_preview_from_str() {
        use std::str::FromStr;

        assert_eq!(Preview::from_str("plain"), Ok(Preview::Plain));
        assert_eq!(Preview::from_str("TABLE"), Ok(Preview::Table));
        assert_eq!(Preview::from_str("json"), Ok(Preview::Json));
        assert_eq!(Preview::from_str("none"), Ok(Preview::None));
        assert!(Preview::from_str("diff").is_err());
    }

    #[test]
    fn test_all_rows_when_plan_fits() {
        let plan = plan_of(3);
        assert_eq!(
            sources(&visible_rows(&plan, Some(3))),
            vec!["file0.txt", "file1.txt", "file2.txt"]
        );
        assert_eq!(visible_rows(&plan, None).len(), 3);
        assert_eq!(visible_rows(&plan, Some(10)).len(), 3);
    }

    #[test]
    fn test_long_plan_keeps_head_and_last() {
        let plan = plan_of(6);
        let rows = visible_rows(&plan, Some(4));

        assert_eq!(
            sources(&rows),
            vec!["file0.txt", "file1.txt", "file2.txt", "...", "file5.txt"]
        );
        assert_eq!(rows[3], PreviewRow::Ellipsis { omitted: 2 });
    }

    #[test]
    fn test_seam_one_over_limit() {
        // Exactly one pair is hidden behind the ellipsis
        let plan = plan_of(4);
        let rows = visible_rows(&plan, Some(3));

        assert_eq!(
            sources(&rows),
            vec!["file0.txt", "file1.txt", "...", "file3.txt"]
        );
        assert_eq!(rows[2], PreviewRow::Ellipsis { omitted: 1 });
    }

    #[test]
    fn test_tiny_limits() {
        let plan = plan_of(3);
        assert_eq!(sources(&visible_rows(&plan, Some(1))), vec!["...", "file2.txt"]);
        assert_eq!(sources(&visible_rows(&plan, Some(0))), vec!["...", "file2.txt"]);

        let single = plan_of(1);
        assert_eq!(sources(&visible_rows(&single, Some(0))), vec!["file0.txt"]);
    }

    #[test]
    fn test_render_none_is_empty() {
        let plan = plan_of(2);
        assert!(render_preview(&plan, Preview::None, None, Some(false)).is_empty());
    }
}
