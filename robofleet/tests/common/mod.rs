//! Common test utilities for fleet integration tests.
#![allow(dead_code)] // Not every test binary uses every helper.

use std::io::Write;
use tempfile::NamedTempFile;

/// Storage header shared by every fixture.
pub const HEADER: &str = "id,alias,type,used_by,start_time,end_time";

/// End time far enough out that tests never race the wall clock.
pub const FAR_FUTURE_MS: i64 = 32_503_680_000_000; // year 3000

/// Builder for on-disk fleet fixtures.
///
/// Collects rows and writes them, under the standard header, into a
/// temporary file the test owns.
#[derive(Default)]
pub struct FleetFixture {
    rows: Vec<String>,
}

impl FleetFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a free robot.
    pub fn free(mut self, id: &str, alias: &str, kind: &str) -> Self {
        self.rows.push(format!("{id},{alias},{kind},,,"));
        self
    }

    /// Adds a robot reserved by `user` over the given window.
    pub fn reserved(
        mut self,
        id: &str,
        alias: &str,
        kind: &str,
        user: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Self {
        self.rows
            .push(format!("{id},{alias},{kind},{user},{start_ms},{end_ms}"));
        self
    }

    /// Writes the fixture to a temp file and returns it.
    pub fn build(self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("failed to create temp fleet file");
        writeln!(file, "{HEADER}").expect("failed to write header");
        for row in self.rows {
            writeln!(file, "{row}").expect("failed to write row");
        }
        file
    }
}
