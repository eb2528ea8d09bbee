// Copyright 2023-2024 Martin Pool

//! Format the even values for stdout.

use itertools::Itertools;
use serde_json::json;

use crate::Options;

/// Render the result as one line, including the trailing newline.
///
/// In the plain format each value is followed by a space; if there are no
/// values the empty marker is printed instead. In JSON, `count` is the number
/// of input values.
pub fn render(evens: &[i64], input_len: usize, options: &Options) -> String {
    if options.emit_json {
        let obj = json!({
            "count": input_len,
            "evens": evens,
        });
        format!("{obj}\n")
    } else if evens.is_empty() {
        format!("{}\n", options.empty_marker)
    } else {
        format!("{} \n", evens.iter().join(" "))
    }
}
