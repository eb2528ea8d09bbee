// Copyright 2024 Martin Pool

//! Read the count and the integers from a text stream.
//!
//! The input is whitespace-separated tokens: first the count `n`, then `n`
//! integers. Line breaks are not significant.

use std::io::{self, Read};

use thiserror::Error;
use tracing::{debug, warn};

/// The input text was not a count followed by that many integers.
#[derive(Debug, Error)]
pub enum InputFormatError {
    #[error("input is empty; expected a count of values")]
    MissingCount,

    #[error("count {token:?} is not a non-negative integer")]
    InvalidCount { token: String },

    #[error("value {index} ({token:?}) is not an integer")]
    InvalidValue { index: usize, token: String },

    #[error("expected {expected} values but found {found}")]
    TooFewValues { expected: usize, found: usize },

    #[error("input is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    #[error("failed to read input")]
    Io(#[from] io::Error),
}

/// Parse a count and that many integers from `text`.
pub fn parse_input(text: &str) -> Result<Vec<i64>, InputFormatError> {
    let mut tokens = text.split_ascii_whitespace();
    let count_token = tokens.next().ok_or(InputFormatError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| InputFormatError::InvalidCount {
            token: count_token.to_owned(),
        })?;
    debug!(count, "read count");
    // Don't trust the count for preallocation: it may be far larger than the input.
    let mut values = Vec::with_capacity(count.min(4096));
    for index in 0..count {
        let Some(token) = tokens.next() else {
            return Err(InputFormatError::TooFewValues {
                expected: count,
                found: index,
            });
        };
        let value = token
            .parse::<i64>()
            .map_err(|_| InputFormatError::InvalidValue {
                index,
                token: token.to_owned(),
            })?;
        values.push(value);
    }
    let extra = tokens.count();
    if extra > 0 {
        warn!(extra, "ignoring tokens after the last value");
    }
    Ok(values)
}

/// Read all of `reader` and parse it with [parse_input].
pub fn read_input<R: Read>(mut reader: R) -> Result<Vec<i64>, InputFormatError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_input(&String::from_utf8(bytes)?)
}
