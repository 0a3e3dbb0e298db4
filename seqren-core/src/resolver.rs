use crate::error::{Result, SeqrenError};
use crate::fs::FileSystem;
use crate::template::NameTemplate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// One planned rename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenamePair {
    source: PathBuf,
    destination: PathBuf,
}

impl RenamePair {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Why a file was left out of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The file already carries its target name.
    Unchanged,
    /// The target name is held by a file that is not moving out of the way.
    Occupied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRename {
    pub pair: RenamePair,
    pub reason: SkipReason,
}

/// How far colliding renames are chased through the rest of the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainResolution {
    /// One promotion pass against the first-pass renames only. Chains of
    /// depth two or more stay dropped.
    #[default]
    Single,
    /// Repeat promotion until nothing changes.
    Full,
}

impl FromStr for ChainResolution {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "full" => Ok(Self::Full),
            _ => Err(format!("Invalid chain resolution mode: {}", s)),
        }
    }
}

/// The ordered renames to execute, plus display widths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pairs: Vec<RenamePair>,
    skipped: Vec<SkippedRename>,
    max_source_len: usize,
    max_destination_len: usize,
}

impl Plan {
    pub fn pairs(&self) -> &[RenamePair] {
        &self.pairs
    }

    pub fn skipped(&self) -> &[SkippedRename] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Widest displayed source path among accepted pairs.
    pub fn max_source_len(&self) -> usize {
        self.max_source_len
    }

    /// Widest displayed destination path among accepted pairs.
    pub fn max_destination_len(&self) -> usize {
        self.max_destination_len
    }

    fn accept(&mut self, pair: RenamePair) {
        self.max_source_len = self.max_source_len.max(display_len(&pair.source));
        self.max_destination_len = self
            .max_destination_len
            .max(display_len(&pair.destination));
        self.pairs.push(pair);
    }
}

/// Number of characters a path takes up when printed.
pub fn display_len(path: &Path) -> usize {
    path.display().to_string().chars().count()
}

/// Join a file name onto the target directory, leaving names in `.` bare.
fn join_in(directory: &Path, name: &str) -> PathBuf {
    if directory == Path::new(".") {
        PathBuf::from(name)
    } else {
        directory.join(name)
    }
}

pub struct Resolver<'a, F: FileSystem> {
    fs: &'a F,
    chain: ChainResolution,
}

impl<'a, F: FileSystem> Resolver<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            chain: ChainResolution::default(),
        }
    }

    #[must_use]
    pub fn with_chain_resolution(mut self, chain: ChainResolution) -> Self {
        self.chain = chain;
        self
    }

    /// Compute the rename plan for `files` (names inside `directory`).
    ///
    /// File `i` always gets sequence number `i + 1`, whether or not its
    /// rename survives. A target that already exists on disk is only used
    /// when the file sitting there is itself renamed earlier in the plan.
    pub fn resolve(
        &self,
        files: &[String],
        directory: &Path,
        template: &NameTemplate,
    ) -> Result<Plan> {
        if files.is_empty() {
            return Err(SeqrenError::EmptyInput);
        }

        let mut plan = Plan::default();
        let mut colliding = Vec::new();

        for (idx, file) in files.iter().enumerate() {
            let name = template.render_for(idx + 1, file)?;
            let pair = RenamePair::new(join_in(directory, file), join_in(directory, &name));

            if pair.source == pair.destination {
                debug!("{} already has its target name", pair.source.display());
                plan.skipped.push(SkippedRename {
                    pair,
                    reason: SkipReason::Unchanged,
                });
            } else if self.fs.exists(&pair.destination) {
                debug!(
                    "{} -> {} collides with an existing file",
                    pair.source.display(),
                    pair.destination.display()
                );
                colliding.push(pair);
            } else {
                plan.accept(pair);
            }
        }

        let mut vacating: HashSet<PathBuf> =
            plan.pairs.iter().map(|pair| pair.source.clone()).collect();

        while !colliding.is_empty() && !vacating.is_empty() {
            let (promoted, blocked): (Vec<_>, Vec<_>) = colliding
                .into_iter()
                .partition(|pair: &RenamePair| vacating.contains(&pair.destination));
            colliding = blocked;

            vacating = promoted.iter().map(|pair| pair.source.clone()).collect();
            for pair in promoted {
                debug!(
                    "{} -> {} promoted, occupant is renamed first",
                    pair.source.display(),
                    pair.destination.display()
                );
                plan.accept(pair);
            }

            if self.chain == ChainResolution::Single {
                break;
            }
        }

        for pair in colliding {
            debug!(
                "dropping {} -> {}, target is occupied",
                pair.source.display(),
                pair.destination.display()
            );
            plan.skipped.push(SkippedRename {
                pair,
                reason: SkipReason::Occupied,
            });
        }

        Ok(plan)
    }
}

/// Resolve with the default single promotion pass.
pub fn resolve<F: FileSystem>(
    fs: &F,
    files: &[String],
    directory: &Path,
    template: &NameTemplate,
) -> Result<Plan> {
    Resolver::new(fs).resolve(files, directory, template)
}
