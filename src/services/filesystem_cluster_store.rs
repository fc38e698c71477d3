use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ClusterStore;

/// Filesystem-based cluster store rooted at an output directory.
#[derive(Debug, Clone)]
pub struct FilesystemClusterStore {
    root: PathBuf,
}

impl FilesystemClusterStore {
    /// Create a store for the given output root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ClusterStore for FilesystemClusterStore {
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(self.resolve(path))
            .map_err(|e| AppError::filesystem("create directory", path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(self.resolve(path), content).map_err(|e| AppError::filesystem("write", path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let source = self.resolve(from);
        fs::copy(&source, self.resolve(to))
            .map(|_| ())
            .map_err(|e| AppError::filesystem("copy", source, e))
    }
}
