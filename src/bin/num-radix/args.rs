//! Command-line argument parsing for the `num-radix` binary.

use clap::{ArgAction, Parser};
use num_radix::prelude::*;

/// Input that selects stream mode for `--encode` and `--decode`
pub const STDIN_MARKER: &str = "-";

/// Radix converter arguments
#[derive(Parser, Debug)]
#[command(name = "num-radix", version)]
#[command(about = "Convert numbers to and from arbitrary positional notations")]
pub struct Args {
    /// Base as a number (1-62) or a preset: bin, oct, hex, hex_lc, dozenal,
    /// dozenal_pitman, dozenal_pitman_ascii, dozenal_dwiggins, dozenal_kramer,
    /// dozenal_ab, base62, base57
    #[arg(short, long, value_name = "BASE", default_value = "dozenal")]
    pub base: String,

    /// Explicit digit alphabet, e.g. 0123456789ab; overrides --base
    #[arg(short = 'g', long, value_name = "DIGITS")]
    pub digits: Option<String>,

    /// Encode a base-10 number, or '-' to encode one number per stdin line
    #[arg(short, long, value_name = "NUMBER", allow_hyphen_values = true, conflicts_with = "decode")]
    pub encode: Option<String>,

    /// Decode a number, or '-' to decode one number per stdin line
    #[arg(short, long, value_name = "NUMBER", allow_hyphen_values = true)]
    pub decode: Option<String>,

    /// Output format: a scale such as 3, or a spec such as ",d" or ".4e"
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Run the demo
    #[arg(long, conflicts_with_all = ["encode", "decode"])]
    pub demo: bool,

    /// Print a single clock line in the demo instead of ticking
    #[arg(long, requires = "demo")]
    pub once: bool,

    /// Separator between integer and fraction
    #[arg(long, value_name = "SYMBOL", help_heading = "Symbols")]
    pub sep: Option<String>,

    /// Negative sign
    #[arg(long, value_name = "SYMBOL", help_heading = "Symbols", allow_hyphen_values = true)]
    pub neg: Option<String>,

    /// Positive sign
    #[arg(long, value_name = "SYMBOL", help_heading = "Symbols")]
    pub pos: Option<String>,

    /// Thousands group separator
    #[arg(long, value_name = "SYMBOL", help_heading = "Symbols")]
    pub tsep: Option<String>,

    /// Exponent marker
    #[arg(long, value_name = "SYMBOL", help_heading = "Symbols")]
    pub exp: Option<String>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    Encode(&'a str),
    Decode(&'a str),
    Demo,
    Help,
}

impl Args {
    pub fn mode(&self) -> Mode<'_> {
        if let Some(number) = self.encode.as_deref() {
            Mode::Encode(number)
        } else if let Some(number) = self.decode.as_deref() {
            Mode::Decode(number)
        } else if self.demo {
            Mode::Demo
        } else {
            Mode::Help
        }
    }

    /// Alphabet selected by `--digits` or `--base`, with symbol overrides.
    pub fn alphabet(&self) -> RadixResult<RadixAlphabet> {
        let mut builder = match (&self.digits, self.base.trim().parse::<usize>()) {
            (Some(digits), _) => RadixAlphabet::builder(digits),
            (None, Ok(base)) => RadixAlphabetBuilder::by_base(base)?,
            (None, Err(_)) => self.base.parse::<Preset>()?.builder(),
        };

        if let Some(symbol) = &self.sep {
            builder = builder.separator(symbol.as_str());
        }
        if let Some(symbol) = &self.neg {
            builder = builder.negative_sign(symbol.as_str());
        }
        if let Some(symbol) = &self.pos {
            builder = builder.positive_sign(symbol.as_str());
        }
        if let Some(symbol) = &self.tsep {
            builder = builder.group_separator(symbol.as_str());
        }
        if let Some(symbol) = &self.exp {
            builder = builder.exponent_marker(symbol.as_str());
        }
        builder.build()
    }

    /// Encode format from `--format`, or the default shortest output.
    pub fn format_spec(&self) -> RadixResult<FormatSpec> {
        self.format
            .as_deref()
            .map_or(Ok(FormatSpec::default()), |spec| spec.parse())
    }

    /// Default log directive for the `-v` count.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "num_radix=warn",
            1 => "num_radix=debug",
            _ => "num_radix=trace",
        }
    }
}
