//! Showcase of an alphabet: multiplication table, constants, fractions and
//! a ticking clock.

use chrono::{Datelike, Local, Timelike, Utc};
use num_radix::prelude::*;
use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

const RESET: &str = "\x1b[0;0m";
const BOLD_RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[0;32m";
const BOLD_CYAN: &str = "\x1b[1;36m";

/// Run every section in order. Unless `once` is set the clock never returns.
pub fn run(alphabet: &RadixAlphabet, once: bool) -> Result<(), Box<dyn Error>> {
    // Reject alphabets that cannot encode before printing anything
    alphabet.encode(0, &FormatSpec::default())?;

    let mut out = io::stdout().lock();
    let colors = io::stdout().is_terminal();
    tracing::debug!(base = alphabet.base(), colors, once, "starting demo");

    multiplication_table(&mut out, alphabet, colors)?;
    constants(&mut out, alphabet)?;
    fractions(&mut out, alphabet)?;
    clock(&mut out, alphabet, once)
}

// ============================================================================
// Sections
// ============================================================================

fn multiplication_table(out: &mut impl Write, alphabet: &RadixAlphabet, colors: bool) -> Result<(), Box<dyn Error>> {
    let base = alphabet.base();
    writeln!(out, "Multiplication Table")?;
    for a in 1..=base {
        for b in 1..=base {
            let n = a * b;
            let cell = format!("{:>2}", alphabet.encode(n, &FormatSpec::default())?);
            match highlight(n, base).filter(|_| colors) {
                Some(color) => write!(out, "{}{}{} ", color, cell, RESET)?,
                None => write!(out, "{} ", cell)?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Colour for a table cell: multiples of the base, then of its half or
/// quarter, then odd products.
fn highlight(n: usize, base: usize) -> Option<&'static str> {
    let divides = |d: usize| d > 0 && base % d == 0 && n % d == 0;
    if n % base == 0 {
        Some(BOLD_RED)
    } else if (divides(base / 2) && base / 2 > 1) || (divides(base / 4) && base / 4 > 1) {
        Some(GREEN)
    } else if n % 2 != 0 {
        Some(BOLD_CYAN)
    } else {
        None
    }
}

fn constants(out: &mut impl Write, alphabet: &RadixAlphabet) -> Result<(), Box<dyn Error>> {
    use std::f64::consts::{E, PI, SQRT_2, TAU};
    let phi = (1.0 + 5f64.sqrt()) / 2.0;

    writeln!(out, "Mathematical Constants")?;
    for (name, value, scale) in [
        ("π ", PI, 14),
        ("τ ", TAU, 13),
        ("e ", E, 12),
        ("√2", SQRT_2, 11),
        ("ϕ ", phi, 10),
    ] {
        writeln!(out, "{} = {}", name, alphabet.encode(value, &FormatSpec::fixed(scale))?)?;
    }
    writeln!(out)?;

    let c = alphabet.wrap(299_792_458);
    writeln!(out, "Physical Constants")?;
    writeln!(out, "c  = {} m/s", c.format_str(",d")?)?;
    writeln!(out, "c  = {} m/s", c.format_str(".2e")?)?;
    writeln!(out, "G  = {} Nm²/kg²", alphabet.wrap(6.6740831e-11).format_str(".8e")?)?;
    writeln!(out, "h  = {} Js", alphabet.wrap(6.62607004081e-34).format_str(".8e")?)?;
    writeln!(out, "e  = {} C", alphabet.wrap(1.6021766208e-19).format_str(".8e")?)?;
    writeln!(out)?;
    Ok(())
}

fn fractions(out: &mut impl Write, alphabet: &RadixAlphabet) -> Result<(), Box<dyn Error>> {
    writeln!(out, "Fractions")?;
    for i in 2..=alphabet.base() {
        let value = 1.0 / i as f64;
        writeln!(out, "1/{:>2} = {}", i, alphabet.encode(value, &FormatSpec::default())?)?;
    }
    writeln!(out)?;
    Ok(())
}

fn clock(out: &mut impl Write, alphabet: &RadixAlphabet, once: bool) -> Result<(), Box<dyn Error>> {
    writeln!(out, "Date & Time")?;
    loop {
        let local = Local::now();
        let utc = Utc::now();
        let line = format!(
            "  Local: {}  UTC: {}  ",
            timestamp(alphabet, &local)?,
            timestamp(alphabet, &utc)?
        );

        if once {
            writeln!(out, "{}", line)?;
            return Ok(());
        }
        write!(out, "{}\r", line)?;
        out.flush()?;

        let elapsed = Duration::from_nanos(local.timestamp_subsec_nanos() as u64);
        std::thread::sleep(Duration::from_secs(1).saturating_sub(elapsed));
    }
}

/// `YYYY-MM-DD hh:mm:ss` with every field written in `alphabet`.
fn timestamp<T>(alphabet: &RadixAlphabet, time: &T) -> RadixResult<String>
where
    T: Datelike + Timelike,
{
    let fields = alphabet.wrap_all([
        time.year() as i64,
        time.month() as i64,
        time.day() as i64,
        time.hour() as i64,
        time.minute() as i64,
        time.second() as i64,
    ]);
    let two_digits = FormatSpec::default().with_width(2);
    let year = fields[0].format(&FormatSpec::default())?;
    let rest = fields[1..]
        .iter()
        .map(|field| field.format(&two_digits))
        .collect::<RadixResult<Vec<_>>>()?;

    Ok(format!(
        "{}-{}-{} {}:{}:{}",
        year, rest[0], rest[1], rest[2], rest[3], rest[4]
    ))
}
