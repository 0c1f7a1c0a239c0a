//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    events_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let events_dir = temp_dir.path().join("events");
        fs::create_dir_all(&events_dir).expect("failed to create events dir");

        Self {
            _temp_dir: temp_dir,
            events_dir,
        }
    }

    pub fn events_dir(&self) -> &Path {
        &self.events_dir
    }

    pub fn write_event(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.events_dir.join(name);
        fs::write(&path, contents).expect("failed to write event file");
        path
    }
}

pub fn evgate() -> Command {
    Command::cargo_bin("evgate").expect("evgate binary builds")
}
