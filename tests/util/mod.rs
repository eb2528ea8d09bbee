// Copyright 2024 Martin Pool

#![allow(dead_code)] // rustc doesn't understand they're used by multiple crates

//! Reusable utilities for evens integration tests.

use std::env;
use std::fs::write;
use std::path::PathBuf;

use lazy_static::lazy_static;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

lazy_static! {
    pub static ref MAIN_BINARY: PathBuf = assert_cmd::cargo::cargo_bin("evens");
}

/// Build a command to run evens in a fresh empty directory, so that no
/// `evens.toml` is picked up by accident.
///
/// The directory is returned so that it lives as long as the command.
pub fn run() -> (assert_cmd::Command, TempDir) {
    let tmp = TempDir::with_prefix("evens-test-").unwrap();
    let mut cmd = assert_cmd::Command::new(MAIN_BINARY.as_os_str());
    cmd.current_dir(tmp.path());
    // Strip any options configured in the environment running these tests,
    // so that they don't cause unexpected behavior in the code under test.
    env::vars()
        .map(|(k, _v)| k)
        .filter(|k| k.starts_with("EVENS_"))
        .for_each(|k| {
            cmd.env_remove(k);
        });
    (cmd, tmp)
}

/// Write `evens.toml` into `dir`.
pub fn write_config_file(dir: &TempDir, config: &str) {
    write(dir.path().join("evens.toml"), config.as_bytes()).unwrap();
}

/// Assert that some bytes, when parsed as json, equal a json value.
pub fn assert_bytes_eq_json(actual: &[u8], expected: serde_json::Value) {
    let actual_json = std::str::from_utf8(actual)
        .expect("bytes are UTF-8")
        .parse::<serde_json::Value>()
        .expect("bytes can be parsed as JSON");
    assert_eq!(actual_json, expected);
}
