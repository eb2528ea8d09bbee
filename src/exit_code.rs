// Copyright 2021 - 2024 Martin Pool

//! Exit codes from evens.
//!
//! These are assigned so that different cases that scripts (or the test
//! suite) might want to distinguish are distinct. The error values follow
//! sysexits.

/// The input was well formed, whether or not any even values were found.
pub const SUCCESS: i32 = 0;

/// The wrong arguments, etc.
///
/// (1 is also the value returned by Clap.)
pub const USAGE: i32 = 1;

/// The input was not UTF-8 text holding a count followed by that many
/// integers (`EX_DATAERR`).
pub const INPUT_FORMAT: i32 = 65;

/// The input could not be opened or read (`EX_NOINPUT`).
pub const NO_INPUT: i32 = 66;

/// The result could not be written to stdout (`EX_IOERR`).
///
/// A closed pipe on stdout is not an error: the reader has stopped listening.
pub const IO_ERR: i32 = 74;

/// The config file could not be read or parsed (`EX_CONFIG`).
pub const CONFIG: i32 = 78;
