// Copyright 2021-2024 Martin Pool

//! `evens`: Read a count and that many integers, and print the even ones.

mod config;
mod exit_code;
mod filter;
mod input;
mod options;
mod output;
mod trace;

use std::fs::File;
use std::io::{self, Write};
use std::process::exit;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use tracing::{debug, info};

// Imports of public names from this crate.
use crate::config::Config;
use crate::filter::find_even_numbers;
use crate::input::{read_input, InputFormatError};
use crate::options::{InputSource, Options};
use crate::output::render;

pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

/// Read a count `n` and then `n` integers, and print the even ones in order,
/// or -1 if there are none.
#[derive(Parser, PartialEq, Debug)]
#[command(name = "evens", author, about)]
struct Args {
    /// file to read; with no file, or `-`, read stdin.
    input: Option<Utf8PathBuf>,

    /// read this config file rather than `evens.toml`.
    #[arg(long, conflicts_with = "no_config")]
    config: Option<Utf8PathBuf>,

    /// generate autocompletions for the given shell.
    #[arg(long)]
    completions: Option<Shell>,

    /// text to print when there are no even values (default -1).
    #[arg(long, allow_hyphen_values = true)]
    empty_marker: Option<String>,

    /// output json.
    #[arg(long)]
    json: bool,

    /// log level for stderr (trace, debug, info, warn, error).
    #[arg(long, short = 'L', default_value = "warn", env = "EVENS_TRACE_LEVEL")]
    level: tracing::Level,

    /// don't read `evens.toml`.
    #[arg(long)]
    no_config: bool,

    /// show version and quit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    version: bool,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help is delivered as an "error" that goes to stdout.
            err.print()?;
            exit(if err.use_stderr() {
                exit_code::USAGE
            } else {
                exit_code::SUCCESS
            });
        }
    };
    trace::setup_global_trace(args.level)?;

    if args.version {
        println!("{NAME} {VERSION}");
        return Ok(());
    } else if let Some(shell) = args.completions {
        generate(shell, &mut Args::command(), NAME, &mut io::stdout());
        return Ok(());
    }

    let config = load_config(&args).unwrap_or_else(|err| fail(err, exit_code::CONFIG));
    debug!(?config);
    let options = Options::new(&args, &config);
    debug!(?options);

    let values = match &options.input {
        InputSource::Stdin => read_input(io::stdin().lock()),
        InputSource::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("open input {path:?}"))
                .unwrap_or_else(|err| fail(err, exit_code::NO_INPUT));
            read_input(file)
        }
    }
    .unwrap_or_else(|err| {
        let code = match err {
            InputFormatError::Io(_) => exit_code::NO_INPUT,
            _ => exit_code::INPUT_FORMAT,
        };
        fail(
            anyhow::Error::new(err).context(format!("read input from {}", options.input)),
            code,
        )
    });

    let evens = find_even_numbers(&values);
    info!(values = values.len(), evens = evens.len(), "filtered input");
    let mut stdout = io::stdout().lock();
    match stdout
        .write_all(render(&evens, values.len(), &options).as_bytes())
        .and_then(|()| stdout.flush())
    {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => debug!("stdout was closed"),
        Err(err) => fail(
            anyhow::Error::new(err).context("write output"),
            exit_code::IO_ERR,
        ),
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    if args.no_config {
        Ok(Config::default())
    } else if let Some(path) = &args.config {
        Config::read_file(path)
    } else {
        Config::read_dir_config(Utf8Path::new("."))
    }
}

/// Print an error with its causes and exit with `code`.
fn fail(err: anyhow::Error, code: i32) -> ! {
    eprintln!("Error: {err:#}");
    exit(code)
}
