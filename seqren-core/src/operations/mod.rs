//! High-level operations that correspond to CLI commands
//!
//! These modules hold the flow for each seqren operation, separated from CLI
//! concerns like argument parsing and status printing.

pub mod plan;
pub mod rename;

pub use plan::{plan_operation, PlannedBatch};
pub use rename::{rename_operation, RenameOptions, RenameStatus};
