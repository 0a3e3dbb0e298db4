use std::io;
use std::path::Path;

/// The two filesystem primitives the resolver and executor rely on.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Operates on the real filesystem through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling symlink still counts as an occupant
        path.symlink_metadata().is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemFs;
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_disk_fs_exists_and_rename() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("a.txt");
        let to = temp_dir.path().join("b.txt");
        fs::write(&from, "a").unwrap();

        let disk = DiskFs;
        assert!(disk.exists(&from));
        assert!(!disk.exists(&to));

        disk.rename(&from, &to).unwrap();
        assert!(!disk.exists(&from));
        assert_eq!(fs::read_to_string(&to).unwrap(), "a");
    }

    #[test]
    fn test_disk_fs_rename_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = DiskFs.rename(
            &temp_dir.path().join("missing"),
            &temp_dir.path().join("other"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_mem_fs_refuses_to_clobber() {
        let mem = MemFs::with_files(["a", "b"]);
        let err = mem.rename(Path::new("a"), Path::new("b")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);

        mem.rename(Path::new("a"), Path::new("c")).unwrap();
        assert!(mem.exists(Path::new("c")));
        assert!(!mem.exists(Path::new("a")));
    }
}
