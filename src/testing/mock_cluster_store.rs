use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ClusterStore;

/// In-memory cluster store recording every operation in call order.
#[derive(Default)]
pub struct MockClusterStore {
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub operations: RefCell<Vec<String>>,
    pub fail_dir: RefCell<Option<PathBuf>>,
}

impl MockClusterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, e.g. a replica template.
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_string());
        self
    }

    /// Make `ensure_dir` fail for `path`.
    pub fn failing_dir(self, path: impl Into<PathBuf>) -> Self {
        *self.fail_dir.borrow_mut() = Some(path.into());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn operations(&self) -> Vec<String> {
        self.operations.borrow().clone()
    }
}

impl ClusterStore for MockClusterStore {
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        if self.fail_dir.borrow().as_deref() == Some(path) {
            return Err(AppError::filesystem(
                "create directory",
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        self.operations.borrow_mut().push(format!("mkdir {}", path.display()));
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.operations.borrow_mut().push(format!("write {}", path.display()));
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let content = self.files.borrow().get(from).cloned().ok_or_else(|| {
            AppError::filesystem("copy", from, io::Error::new(io::ErrorKind::NotFound, "not found"))
        })?;
        self.operations.borrow_mut().push(format!("copy {} {}", from.display(), to.display()));
        self.files.borrow_mut().insert(to.to_path_buf(), content);
        Ok(())
    }
}
