//! Shared testing utilities for replgen CLI tests.

use assert_cmd::Command;
use replgen::domain::cluster_config::ENV_VARS;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `replgen` binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `replgen` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("replgen").expect("Failed to locate replgen binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.root.path()).env_remove("RUST_LOG");
        // Keep the host environment from leaking into generated files.
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write `.env` into the work directory.
    pub fn write_env(&self, content: &str) {
        fs::write(self.work_dir.join(".env"), content).expect("Failed to write .env");
    }

    /// Create `slave-template/config/` with both static replica files.
    pub fn write_replica_templates(&self) {
        let dir = self.work_dir.join("slave-template/config");
        fs::create_dir_all(&dir).expect("Failed to create template directory");
        fs::write(dir.join("pg_hba.conf"), "# replica pg_hba\n").expect("Failed to write pg_hba");
        fs::write(dir.join("pg_ident.conf"), "# replica pg_ident\n")
            .expect("Failed to write pg_ident");
    }

    /// Absolute path of a file relative to the work directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Read a generated file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Assert that a generated file exists.
    pub fn assert_exists(&self, relative: &str) {
        assert!(self.path(relative).exists(), "{} should exist", relative);
    }

    /// Assert that a file was not generated.
    pub fn assert_not_exists(&self, relative: &str) {
        assert!(!self.path(relative).exists(), "{} should not exist", relative);
    }
}
