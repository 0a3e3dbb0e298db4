use crate::error::{Result, SeqrenError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lexically clean a directory path: drop `.` segments and fold `..` where
/// possible. An empty path becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        // Non UTF-8 paths are used as given
        return path.to_path_buf();
    };

    let cleaned = path_clean::clean(raw);
    if cleaned.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(cleaned)
    }
}

/// Names of the regular files directly inside `dir`, sorted by name.
///
/// Subdirectories and non-UTF-8 names are skipped. Symlinks are not followed.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(SeqrenError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            SeqrenError::Io(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
            }))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => files.push(name.to_string()),
            None => tracing::debug!("skipping non UTF-8 file name {:?}", entry.file_name()),
        }
    }

    if files.is_empty() {
        return Err(SeqrenError::EmptyDirectory(dir.to_path_buf()));
    }

    Ok(files)
}
