//! Shared test utilities for layered-config integration tests.
//!
//! Invariants / Assumptions:
//! - Commands never inherit `LAYERED_CONFIG_FILE` or `RUST_LOG` from the host.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `layered-config` command for integration testing.
pub fn layered_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("layered-config");
    cmd.env_remove("LAYERED_CONFIG_FILE").env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `name` inside a fresh temp dir.
#[allow(dead_code)]
pub fn write_config(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config file");
    (temp_dir, path)
}
