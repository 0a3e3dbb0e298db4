use crate::error::Result;
use crate::fs::FileSystem;
use crate::listing::{clean_path, list_files};
use crate::resolver::{ChainResolution, Plan, Resolver};
use crate::template::{validate_base_name, NameTemplate};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A resolved plan together with the cleaned directory it applies to.
#[derive(Debug, Clone)]
pub struct PlannedBatch {
    pub directory: PathBuf,
    pub plan: Plan,
}

/// Validate the inputs, list the directory and resolve the rename plan.
///
/// Validation failures are returned before the directory is touched beyond
/// being listed.
pub fn plan_operation<F: FileSystem>(
    fs: &F,
    directory: &Path,
    base_name: &str,
    seq_width: usize,
    chain: ChainResolution,
) -> Result<PlannedBatch> {
    validate_base_name(base_name)?;

    let directory = clean_path(directory);
    let files = list_files(&directory)?;
    let template = NameTemplate::new(base_name, seq_width)?;
    debug!(
        "resolving {} files in {} as {}",
        files.len(),
        directory.display(),
        template.base()
    );

    let plan = Resolver::new(fs)
        .with_chain_resolution(chain)
        .resolve(&files, &directory, &template)?;

    Ok(PlannedBatch { directory, plan })
}
