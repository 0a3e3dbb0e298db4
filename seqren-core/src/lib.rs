#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod execute;
pub mod fs;
pub mod listing;
pub mod operations;
pub mod output;
pub mod preview;
pub mod resolver;
pub mod template;

pub use config::Config;
pub use error::{Result, SeqrenError};
pub use execute::{confirm, execute, RenameOutcome, AFFIRMATIVE};
pub use fs::{DiskFs, FileSystem};
pub use listing::{clean_path, list_files};
pub use operations::{plan_operation, rename_operation, PlannedBatch, RenameOptions, RenameStatus};
pub use output::{OutputFormat, OutputFormatter, RenameResult};
pub use preview::{render_preview, visible_rows, Preview, PreviewRow};
pub use resolver::{
    resolve, ChainResolution, Plan, RenamePair, Resolver, SkipReason, SkippedRename,
};
pub use template::{extension, validate_base_name, NameTemplate};
