//! Scratch directory and per-request temp files.
//!
//! Each download request allocates exactly one `ScratchFile`. The file is a
//! drop guard: whoever holds it last (usually the response body stream)
//! removes the file on drop, which covers success, error, and client
//! disconnect with a single mechanism.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

/// A directory holding transient per-request output files.
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    /// Open (creating if needed) a scratch directory at `root`.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reserve a unique file name with the given extension.
    ///
    /// Only the name is reserved; the subprocess creates the file itself.
    /// UUIDv4 names keep concurrent requests from colliding.
    #[must_use]
    pub fn allocate(&self, extension: &str) -> ScratchFile {
        let path = self.root.join(format!("{}.{extension}", Uuid::new_v4()));
        ScratchFile { path }
    }
}

/// Drop guard for a single scratch file.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(target: "ytgate.scratch", path = %self.path.display(), "removed scratch file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                debug!(target: "ytgate.scratch", path = %self.path.display(), error = %e, "failed to remove scratch file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn creates_root_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/scratch");
        let dir = ScratchDir::new(&nested).unwrap();
        assert!(dir.root().is_dir());
    }

    #[test]
    fn allocations_do_not_collide() {
        let temp = TempDir::new().unwrap();
        let dir = ScratchDir::new(temp.path()).unwrap();

        let names: HashSet<PathBuf> = (0..64)
            .map(|_| dir.allocate("mp4").path().to_path_buf())
            .collect();
        assert_eq!(names.len(), 64);
        for name in &names {
            assert_eq!(name.extension().and_then(|e| e.to_str()), Some("mp4"));
        }
    }

    #[test]
    fn drop_removes_existing_file() {
        let temp = TempDir::new().unwrap();
        let dir = ScratchDir::new(temp.path()).unwrap();

        let file = dir.allocate("mp3");
        std::fs::write(file.path(), b"partial").unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn drop_is_silent_when_file_was_never_created() {
        let temp = TempDir::new().unwrap();
        let dir = ScratchDir::new(temp.path()).unwrap();
        let file = dir.allocate("mp4");
        drop(file);
        // Directory still usable afterwards
        assert!(dir.root().is_dir());
    }
}
