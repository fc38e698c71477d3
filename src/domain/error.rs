use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for replgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Filesystem operation failed on a specific path.
    #[error("Failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Explicitly requested env file does not exist.
    #[error("Env file not found: {}", .0.display())]
    EnvFileNotFound(PathBuf),

    /// Env file exists but could not be parsed.
    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },

    /// Environment variable holds a value that cannot be used.
    #[error("Invalid value '{value}' for {name}: {reason}")]
    InvalidVariable { name: &'static str, value: String, reason: String },

    /// Credential would break the syntax of a generated file (strict mode).
    #[error("Unsafe credential: {0}")]
    UnsafeCredential(String),

    /// Embedded template failed to load or render.
    #[error("Template error: {0}")]
    Template(String),

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        AppError::Filesystem { action, path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Filesystem { source, .. } => source.kind(),
            AppError::EnvFileNotFound(_) => io::ErrorKind::NotFound,
            AppError::EnvFile { .. }
            | AppError::InvalidVariable { .. }
            | AppError::UnsafeCredential(_) => io::ErrorKind::InvalidInput,
            AppError::Template(_) | AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}
