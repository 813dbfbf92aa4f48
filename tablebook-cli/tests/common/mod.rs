//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A date far enough ahead to stay valid against the real clock.
#[allow(dead_code)]
pub const FUTURE_DATE: &str = "17-12-2099";

/// The same date in store format.
#[allow(dead_code)]
pub const FUTURE_DATE_STORED: &str = "2099-12-17";

/// Test environment with an isolated home and store file.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory used as `HOME`
/// - A store file path inside it (not created yet)
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the reservation store file
    pub database: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let database = temp_path.join("reservation_database.json");

        Self {
            temp_dir,
            temp_path,
            database,
        }
    }

    /// Get a command builder without the store flag.
    ///
    /// `HOME` points at the temporary directory and `TABLEBOOK_*`
    /// variables from the outer environment are removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablebook").expect("Failed to find tablebook binary");
        cmd.env("HOME", &self.temp_path);
        for var in [
            "TABLEBOOK_DATABASE",
            "TABLEBOOK_CONFIG",
            "TABLEBOOK_DISABLE_AUTOINIT",
            "TABLEBOOK_LOG_MODE",
            "TABLEBOOK_TABLES",
            "TABLEBOOK_TABLE_CAPACITY",
            "TABLEBOOK_SLOTS",
            "TABLEBOOK_MAX_ATTEMPTS",
            "TABLEBOOK_OUTPUT_FORMAT",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--database` pointing at this
    /// environment's store file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--database").arg(&self.database);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a reservation, asserting success.
    pub fn create(&self, name: &str, date: &str, time: &str, people: u16) {
        self.command()
            .args(["create", "--name", name, "--date", date, "--time", time])
            .arg("--people")
            .arg(people.to_string())
            .assert()
            .success();
    }

    /// Read the store file as JSON.
    pub fn store_json(&self) -> serde_json::Value {
        let contents = std::fs::read_to_string(&self.database).expect("Failed to read store");
        serde_json::from_str(&contents).expect("Store is not valid JSON")
    }

    /// Write a file in the test environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
