//! Common test utilities for CLI integration tests.
#![allow(dead_code)] // Not every test binary uses every helper.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Storage header shared by every fixture.
pub const HEADER: &str = "id,alias,type,used_by,start_time,end_time";

/// End time far enough out that tests never race the wall clock.
pub const FAR_FUTURE_MS: i64 = 32_503_680_000_000; // year 3000

/// Test environment with an isolated storage file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
    /// Path to the storage file inside the temp directory.
    pub data_file: PathBuf,
}

impl TestEnv {
    /// Create a test environment seeded with the given data rows.
    pub fn with_rows(rows: &[&str]) -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_file = temp_dir.path().join("robots.csv");

        let mut text = format!("{HEADER}\n");
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        fs::write(&data_file, text).expect("failed to seed storage file");

        Self {
            temp_dir,
            data_file,
        }
    }

    /// A command builder with the storage file pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("robofleet").expect("failed to find robofleet binary");
        cmd.arg("--file").arg(&self.data_file);
        // Keep the user's real config and environment out of the test.
        cmd.env_remove("ROBOFLEET_FILE");
        cmd.env("HOME", self.temp_dir.path());
        cmd
    }

    /// The current storage file contents.
    pub fn storage(&self) -> String {
        fs::read_to_string(&self.data_file).expect("failed to read storage file")
    }
}
