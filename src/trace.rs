// Copyright 2021-2024 Martin Pool

//! Send trace messages to stderr, keeping stdout for the result.

use std::io;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::Result;

/// Configure tracing to write messages at or above `level` to stderr.
pub fn setup_global_trace(level: Level) -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(LevelFilter::from_level(level));
    tracing_subscriber::registry().with(stderr_layer).try_init()?;
    Ok(())
}
