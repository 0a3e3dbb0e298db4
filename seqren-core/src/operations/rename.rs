use super::plan::plan_operation;
use crate::error::Result;
use crate::execute::{confirm, execute};
use crate::fs::FileSystem;
use crate::output::RenameResult;
use crate::preview::{render_preview, Preview};
use crate::resolver::ChainResolution;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Everything a rename run needs, resolved from CLI flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    pub directory: PathBuf,
    pub base_name: String,
    pub seq_width: usize,
    /// Preview row bound; `None` shows every pair
    pub max_rows: Option<usize>,
    /// Skip the confirmation prompt
    pub force: bool,
    pub dry_run: bool,
    pub preview: Preview,
    pub chain_resolution: ChainResolution,
    pub use_color: Option<bool>,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            base_name: String::new(),
            seq_width: 3,
            max_rows: Some(10),
            force: false,
            dry_run: false,
            preview: Preview::Plain,
            chain_resolution: ChainResolution::Single,
            use_color: None,
        }
    }
}

/// How a rename run ended. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameStatus {
    /// The plan ran; individual renames may still have failed.
    Completed,
    /// Every file was skipped, so there was nothing to do.
    NothingToDo,
    /// The user did not confirm.
    Declined,
    /// Preview only.
    DryRun,
}

/// Plan, preview, confirm and execute a sequential rename.
///
/// The preview and prompt go to `out`; the answer is read from `input`.
pub fn rename_operation<F, R, W>(
    fs: &F,
    options: &RenameOptions,
    input: &mut R,
    out: &mut W,
) -> Result<(RenameStatus, RenameResult)>
where
    F: FileSystem,
    R: BufRead,
    W: Write,
{
    let batch = plan_operation(
        fs,
        &options.directory,
        &options.base_name,
        options.seq_width,
        options.chain_resolution,
    )?;
    let mut result =
        RenameResult::from_plan(batch.directory.clone(), &options.base_name, &batch.plan);

    if batch.plan.is_empty() {
        return Ok((RenameStatus::NothingToDo, result));
    }

    if options.preview != Preview::None {
        let preview = render_preview(
            &batch.plan,
            options.preview,
            options.max_rows,
            options.use_color,
        );
        writeln!(out)?;
        writeln!(out, "{}", preview.trim_end())?;
        writeln!(out)?;
    }

    if options.dry_run {
        result.dry_run = true;
        return Ok((RenameStatus::DryRun, result));
    }

    if !options.force && !confirm(input, out)? {
        return Ok((RenameStatus::Declined, result));
    }

    let outcomes = execute(fs, &batch.plan);
    result.record(&outcomes);

    Ok((RenameStatus::Completed, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::DiskFs;
    use std::collections::BTreeSet;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn listing(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn setup(files: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for file in files {
            fs::write(temp_dir.path().join(file), file).unwrap();
        }
        temp_dir
    }

    fn options(dir: &Path) -> RenameOptions {
        RenameOptions {
            directory: dir.to_path_buf(),
            base_name: "img".to_string(),
            seq_width: 2,
            use_color: Some(false),
            ..Default::default()
        }
    }

    fn run(options: &RenameOptions, answer: &str) -> (RenameStatus, RenameResult, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut out = Vec::new();
        let (status, result) = rename_operation(&DiskFs, options, &mut input, &mut out).unwrap();
        (status, result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_confirmed_run_renames_everything() {
        let temp_dir = setup(&["a.jpg", "b.jpg"]);
        let (status, result, out) = run(&options(temp_dir.path()), "y\n");

        assert_eq!(status, RenameStatus::Completed);
        assert_eq!(result.renamed, 2);
        assert!(out.contains("Execute OK? (y/n): "));
        assert_eq!(
            listing(temp_dir.path()),
            BTreeSet::from(["img01.jpg".to_string(), "img02.jpg".to_string()])
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("img02.jpg")).unwrap(),
            "b.jpg"
        );
    }

    #[test]
    fn test_declined_run_leaves_directory_untouched() {
        let temp_dir = setup(&["a.jpg", "b.jpg"]);
        let before = listing(temp_dir.path());

        let (status, result, out) = run(&options(temp_dir.path()), "n\n");

        assert_eq!(status, RenameStatus::Declined);
        assert_eq!(result.renamed, 0);
        assert!(out.contains("a.jpg"));
        assert_eq!(listing(temp_dir.path()), before);
    }

    #[test]
    fn test_force_skips_prompt() {
        let temp_dir = setup(&["a.jpg"]);
        let mut opts = options(temp_dir.path());
        opts.force = true;

        let (status, _, out) = run(&opts, "");

        assert_eq!(status, RenameStatus::Completed);
        assert!(!out.contains("Execute OK?"));
        assert!(temp_dir.path().join("img01.jpg").exists());
    }

    #[test]
    fn test_dry_run_stops_after_preview() {
        let temp_dir = setup(&["a.jpg"]);
        let mut opts = options(temp_dir.path());
        opts.dry_run = true;

        let (status, result, out) = run(&opts, "y\n");

        assert_eq!(status, RenameStatus::DryRun);
        assert!(result.dry_run);
        assert!(out.contains("img01.jpg"));
        assert!(temp_dir.path().join("a.jpg").exists());
    }

    #[test]
    fn test_nothing_to_do() {
        let temp_dir = setup(&["img01.jpg"]);
        let (status, result, out) = run(&options(temp_dir.path()), "y\n");

        assert_eq!(status, RenameStatus::NothingToDo);
        assert_eq!(result.unchanged, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_preview_none_prints_only_prompt() {
        let temp_dir = setup(&["a.jpg"]);
        let mut opts = options(temp_dir.path());
        opts.preview = Preview::None;

        let (_, _, out) = run(&opts, "n\n");
        assert_eq!(out, "Execute OK? (y/n): ");
    }
}
