//! num-radix command line front end
//!
//! Run with: cargo run --release -- -b dozenal -e 3.14159

mod args;
mod demo;

use args::{Args, Mode, STDIN_MARKER};
use clap::{CommandFactory, Parser};
use num_radix::prelude::*;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit code when no mode was selected
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays one result per line
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_directive().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn Error>> {
    let mode = args.mode();
    if mode == Mode::Help {
        Args::command().print_help()?;
        return Ok(ExitCode::from(USAGE_EXIT));
    }

    let alphabet = args.alphabet()?;
    tracing::debug!(base = alphabet.base(), ?mode, "alphabet ready");

    match mode {
        Mode::Encode(input) => {
            let spec = args.format_spec()?;
            transcode(input, |line| alphabet.encode(line.parse::<Number>()?, &spec))
        },
        Mode::Decode(input) => transcode(input, |line| alphabet.decode(line).map(|n| n.to_string())),
        Mode::Demo => {
            demo::run(&alphabet, args.once)?;
            Ok(ExitCode::SUCCESS)
        },
        Mode::Help => Ok(ExitCode::from(USAGE_EXIT)),
    }
}

/// Apply `convert` to a single argument, or to every non-blank stdin line
/// when the argument is `-`.
///
/// A single argument fails fast. In stream mode a bad line is reported on
/// stderr and the stream continues; the exit code records the failure.
fn transcode<F>(input: &str, convert: F) -> Result<ExitCode, Box<dyn Error>>
where
    F: Fn(&str) -> RadixResult<String>,
{
    let mut out = io::stdout().lock();
    if input != STDIN_MARKER {
        writeln!(out, "{}", convert(input.trim())?)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut failures = 0usize;
    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match convert(line) {
            Ok(result) => writeln!(out, "{}", result)?,
            Err(e) => {
                failures += 1;
                tracing::debug!(line = index + 1, input = line, error = %e, "conversion failed");
                eprintln!("error: line {}: {}: {}", index + 1, line, e);
            },
        }
    }

    if failures > 0 {
        tracing::warn!(failures, "some lines could not be converted");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
