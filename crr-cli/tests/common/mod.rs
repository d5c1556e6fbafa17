//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a room list and schedule in a temporary directory
//! - Command builder helpers for common patterns
//! - Parsing of `list --format json` output

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Rooms written to every test environment's room list.
pub const ROOMS: [&str; 3] = ["Lounge", "Atrium", "Library"];

/// Test environment with an isolated room list and schedule.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the room list
    pub rooms_file: PathBuf,
    /// Path to the reservation file (not created until the first save)
    pub schedule_file: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with the default rooms.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let rooms_file = temp_path.join("rooms.dat");
        let schedule_file = temp_path.join("schedule.dat");

        let env = Self {
            temp_dir,
            temp_path,
            rooms_file,
            schedule_file,
        };
        env.write_rooms(&ROOMS);
        env
    }

    /// Replace the room list.
    pub fn write_rooms(&self, names: &[&str]) {
        let mut contents = names.join("\n");
        contents.push('\n');
        std::fs::write(&self.rooms_file, contents).expect("Failed to write room list");
    }

    /// Get a bare command builder without pre-configured file flags.
    ///
    /// The command runs inside the temporary directory with `HOME` pointed
    /// at it, so no user or project configuration leaks in, and with the
    /// local time zone pinned to UTC.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("crr").expect("Failed to find crr binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env("TZ", "UTC")
            .env_remove("CRR_ROOMS_FILE")
            .env_remove("CRR_SCHEDULE_FILE")
            .env_remove("CRR_OUTPUT_FORMAT")
            .env_remove("CRR_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--rooms` and `--schedule` pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--rooms")
            .arg(&self.rooms_file)
            .arg("--schedule")
            .arg(&self.schedule_file);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Reserve a room, asserting success.
    pub fn add(&self, room: &str, start: &str, end: &str, description: &str) {
        self.command()
            .arg("add")
            .arg("--room")
            .arg(room)
            .arg("--start")
            .arg(start)
            .arg("--end")
            .arg(end)
            .arg("--description")
            .arg(description)
            .assert()
            .success();
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run crr");

        assert!(
            output.status.success(),
            "crr {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// List all reservations as parsed JSON rows.
    pub fn list_json(&self) -> Vec<Value> {
        let stdout = self.stdout(&["list", "--format", "json"]);
        serde_json::from_str(&stdout).expect("list output is not a JSON array")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-empty stdout lines.
#[allow(dead_code)]
pub fn lines(output: &str) -> Vec<&str> {
    output.lines().filter(|l| !l.trim().is_empty()).collect()
}
