use crate::execute::RenameOutcome;
use crate::resolver::{Plan, SkipReason};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRename {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: String,
}

/// Result of a sequential rename run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameResult {
    pub directory: PathBuf,
    pub base_name: String,
    pub planned: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub occupied: usize,
    pub failed: Vec<FailedRename>,
    pub dry_run: bool,
}

impl RenameResult {
    /// Summarise a plan before anything has been executed.
    pub fn from_plan(directory: PathBuf, base_name: &str, plan: &Plan) -> Self {
        let count = |reason: SkipReason| {
            plan.skipped()
                .iter()
                .filter(|skipped| skipped.reason == reason)
                .count()
        };

        Self {
            directory,
            base_name: base_name.to_string(),
            planned: plan.len(),
            renamed: 0,
            unchanged: count(SkipReason::Unchanged),
            occupied: count(SkipReason::Occupied),
            failed: Vec::new(),
            dry_run: false,
        }
    }

    /// Record what happened when the plan ran.
    pub fn record(&mut self, outcomes: &[RenameOutcome<'_>]) {
        for outcome in outcomes {
            match &outcome.result {
                Ok(()) => self.renamed += 1,
                Err(e) => self.failed.push(FailedRename {
                    source: outcome.pair.source().to_path_buf(),
                    destination: outcome.pair.destination().to_path_buf(),
                    error: e.to_string(),
                }),
            }
        }
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.failed.is_empty(),
            "operation": "rename",
            "directory": self.directory,
            "base_name": self.base_name,
            "dry_run": self.dry_run,
            "summary": {
                "planned": self.planned,
                "renamed": self.renamed,
                "unchanged": self.unchanged,
                "occupied": self.occupied,
                "failed": self.failed.len(),
            },
            "failures": self.failed,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            writeln!(output, "Dry run: {} files would be renamed", self.planned).unwrap();
        } else {
            writeln!(output, "Renamed {} of {} files", self.renamed, self.planned).unwrap();
        }

        if self.occupied > 0 {
            writeln!(
                output,
                "Skipped {} files whose target name is taken",
                self.occupied
            )
            .unwrap();
        }

        for failure in &self.failed {
            writeln!(
                output,
                "✗ {} -> {}: {}",
                failure.source.display(),
                failure.destination.display(),
                failure.error
            )
            .unwrap();
        }

        output
    }
}
