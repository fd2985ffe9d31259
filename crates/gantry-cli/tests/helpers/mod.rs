use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness for running CLI commands against temporary task files
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new test harness with an empty temporary directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a task file and return its path
    pub fn write_tasks(&self, name: &str, json: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, json).expect("Failed to write task file");
        path
    }

    /// Get a Command instance configured for testing
    ///
    /// Runs inside the temp directory so no stray gantry.toml is picked up,
    /// with a fixed timezone and clock.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("gantry").expect("Failed to find gantry binary");
        cmd.current_dir(self.temp_dir.path())
            .env_remove("GANTRY_SOURCES")
            .env_remove("GANTRY_TASKS_DIR")
            .env_remove("GANTRY_SHOW_COMPLETED")
            .env_remove("GANTRY_WINDOW_DAYS")
            .env("GANTRY_TIMEZONE", "UTC")
            .env("GANTRY_LOG", "off")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Two events on 2024-06-10 and one the day after
    pub fn day_events() -> &'static str {
        r#"[
            {"id": "a", "name": "Task A", "start": "2024-06-10T08:00:00Z", "end": "2024-06-10T09:00:00Z"},
            {"id": "b", "name": "Task B", "start": "2024-06-09T23:00:00Z", "end": "2024-06-10T00:30:00Z"},
            {"id": "c", "name": "Task C", "start": "2024-06-11T00:00:00Z", "end": "2024-06-11T01:00:00Z"}
        ]"#
    }

    /// A weekly event and a long finished one
    pub fn recurring_events() -> &'static str {
        r#"[
            {"id": "bear", "name": "Bear Trap", "start": "2024-01-01", "end": "2024-01-02",
             "repeat": {"interval": 7, "end_date": "2024-01-15"}},
            {"id": "old", "name": "Old Festival", "start": "2023-12-01", "end": "2023-12-03"}
        ]"#
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains chart headers
    pub fn has_chart_headers() -> impl Predicate<str> {
        predicate::str::contains("Name")
            .and(predicate::str::contains("Start"))
            .and(predicate::str::contains("Progress"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }

    /// Predicate to check for user notices
    pub fn has_notice() -> impl Predicate<str> {
        predicate::str::contains("Notice:")
    }
}
