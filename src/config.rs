// Copyright 2022-2024 Martin Pool.

//! `evens.toml` configuration file.
//!
//! The config file is read after parsing command line arguments, because
//! they can name the file or turn it off.
//!
//! The config file is then merged in to the [Options](crate::options::Options).

use std::fs::read_to_string;

use anyhow::Context;
use camino::Utf8Path;
use serde::Deserialize;

use crate::Result;

/// Name of the config file looked for in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "evens.toml";

/// Configuration read from a config file.
///
/// This is similar to `Options`, and eventually merged into it, but separate
/// because it can be deserialized.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Emit JSON rather than the plain line format.
    pub json: bool,
    /// Text to print when there are no even values.
    pub empty_marker: Option<String>,
}

impl Config {
    pub fn read_file(path: &Utf8Path) -> Result<Config> {
        let toml = read_to_string(path).with_context(|| format!("read config {path:?}"))?;
        Config::from_toml(&toml).with_context(|| format!("parse toml from {path:?}"))
    }

    pub fn from_toml(toml: &str) -> Result<Config> {
        Ok(toml::de::from_str(toml)?)
    }

    /// Read `evens.toml` from `dir`, or return a default (empty) Config if the
    /// file does not exist.
    pub fn read_dir_config(dir: &Utf8Path) -> Result<Config> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Config::read_file(&path)
        } else {
            Ok(Config::default())
        }
    }
}
