// Copyright 2021-2024 Martin Pool

//! Global in-process options, merged from the command line and the config file.

use std::fmt;

use camino::Utf8PathBuf;

use crate::config::Config;
use crate::Args;

/// Text printed when there are no even values, unless configured otherwise.
pub const DEFAULT_EMPTY_MARKER: &str = "-1";

/// Where to read the input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(Utf8PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("stdin"),
            InputSource::File(path) => write!(f, "{path:?}"),
        }
    }
}

/// Options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: InputSource,

    /// Emit JSON rather than the plain line format.
    pub emit_json: bool,

    /// Printed in the plain format when no even values exist.
    pub empty_marker: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: InputSource::Stdin,
            emit_json: false,
            empty_marker: DEFAULT_EMPTY_MARKER.to_owned(),
        }
    }
}

impl Options {
    /// Build options from the command line and config, with the command line
    /// taking precedence.
    pub fn new(args: &Args, config: &Config) -> Options {
        let input = match &args.input {
            Some(path) if path.as_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        };
        Options {
            input,
            emit_json: args.json || config.json,
            empty_marker: args
                .empty_marker
                .as_ref()
                .or(config.empty_marker.as_ref())
                .cloned()
                .unwrap_or_else(|| DEFAULT_EMPTY_MARKER.to_owned()),
        }
    }
}
