use std::path::Path;

use crate::domain::AppError;

/// Storage the generator writes node configuration into.
///
/// Paths are relative to the store's output root. An absolute `from` path in
/// [`ClusterStore::copy_file`] is used as-is.
pub trait ClusterStore {
    /// Create `path` and any missing ancestors. No-op if it already exists as a directory.
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Write `content` to `path`, replacing any previous file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Copy the file at `from` to `to` unchanged.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;
}
