use std::path::PathBuf;
use thiserror::Error;

/// Characters rejected in base names and rendered file names on every host.
pub const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

#[derive(Debug, Error)]
pub enum SeqrenError {
    #[error("'' is not valid name.")]
    EmptyName,

    #[error("'{0}' has a character that is unusable on Windows.")]
    InvalidName(String),

    #[error("'{0}' is invalid. Please specify 1 or more.")]
    InvalidSeqWidth(i64),

    #[error("'{width}' is invalid. Please specify {max} or less.")]
    SeqWidthTooLarge { width: usize, max: usize },

    #[error("'{}' is not an existing directory.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("no files to rename in directory '{}'.", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("generated name '{0}' is not a valid file name")]
    InvalidTemplate(String),

    #[error("no files to rename")]
    EmptyInput,

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SeqrenError> = std::result::Result<T, E>;
