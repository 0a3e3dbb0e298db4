use crate::fs::FileSystem;
use crate::resolver::{Plan, RenamePair};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Answers accepted as a yes at the confirmation prompt.
pub const AFFIRMATIVE: &[&str] = &["y", "Y", "yes", "Yes", "YES"];

/// Prompt on `writer` and read one line from `reader`.
///
/// Only the exact tokens in [`AFFIRMATIVE`] count as consent; anything else,
/// including end of input, is a no.
pub fn confirm<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<bool> {
    write!(writer, "Execute OK? (y/n): ")?;
    writer.flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(AFFIRMATIVE.contains(&input.trim()))
}

/// Result of attempting one rename.
#[derive(Debug)]
pub struct RenameOutcome<'a> {
    pub pair: &'a RenamePair,
    pub result: io::Result<()>,
}

impl RenameOutcome<'_> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Rename every pair in plan order.
///
/// A failed rename is logged and recorded; the remaining pairs still run.
pub fn execute<'a, F: FileSystem>(fs: &F, plan: &'a Plan) -> Vec<RenameOutcome<'a>> {
    plan.pairs()
        .iter()
        .map(|pair| {
            let result = fs.rename(pair.source(), pair.destination());
            if let Err(e) = &result {
                warn!(
                    "failed to rename {} -> {}: {}",
                    pair.source().display(),
                    pair.destination().display(),
                    e
                );
            }
            RenameOutcome { pair, result }
        })
        .collect()
}
