// ============================================================================
// Format Specification
// Output shape of encoded numbers: width, scale, sign, grouping, notation
// ============================================================================

use crate::numeric::RadixError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scale used by the `f` and `e` format types when no precision is given
pub const DEFAULT_TYPED_PRECISION: u32 = 6;

// ============================================================================
// Format Options
// ============================================================================

/// Number of fractional digits to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scale {
    /// Shortest digits that identify the value, trailing zeros trimmed
    #[default]
    Auto,
    /// Exactly this many digits, rounded half-up
    Fixed(u32),
}

/// When to render a sign symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignDisplay {
    /// Only negative numbers carry a sign
    #[default]
    NegativeOnly,
    /// Non-negative numbers carry the positive sign
    Always,
}

/// Plain positional notation or mantissa plus exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    #[default]
    Plain,
    /// Mantissa normalised to [1, base) followed by a radix-encoded exponent
    Scientific,
}

// ============================================================================
// Format Specification
// ============================================================================

/// Describes how an encoded number is laid out.
///
/// The default is plain notation, automatic scale, sign on negatives only,
/// no grouping and no minimum width.
///
/// # Example
/// ```
/// use num_radix::prelude::*;
///
/// let spec = FormatSpec::default().with_grouping(true);
/// let decimal = RadixAlphabet::by_base(10).unwrap();
/// assert_eq!(decimal.encode(1_000_000, &spec).unwrap(), "1,000,000");
///
/// let parsed: FormatSpec = ",".parse().unwrap();
/// assert_eq!(parsed, spec);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatSpec {
    /// Minimum number of integer digits, padded with the zero digit
    pub width: usize,

    /// Fractional digit count
    pub scale: Scale,

    /// Sign rendering policy
    pub sign: SignDisplay,

    /// Insert the group separator between integer digit triples
    pub grouping: bool,

    /// Plain or scientific notation
    pub notation: Notation,

    /// Keep the separator (followed by one zero digit) when automatic scale
    /// trims away every fractional digit of a non-integer value
    pub keep_point: bool,
}

impl FormatSpec {
    /// Fixed number of fractional digits, everything else default.
    pub fn fixed(scale: u32) -> Self {
        Self::default().with_scale(Scale::Fixed(scale))
    }

    /// Builder method: Set the minimum integer digit count
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Builder method: Set the fractional scale
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Builder method: Set the sign policy
    pub fn with_sign(mut self, sign: SignDisplay) -> Self {
        self.sign = sign;
        self
    }

    /// Builder method: Enable or disable digit grouping
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Builder method: Switch to scientific notation
    pub fn scientific(mut self) -> Self {
        self.notation = Notation::Scientific;
        self
    }

    /// Builder method: Keep the separator on whole non-integer values
    pub fn with_point(mut self, keep_point: bool) -> Self {
        self.keep_point = keep_point;
        self
    }
}

impl From<u32> for FormatSpec {
    /// A bare number is a fixed scale.
    fn from(scale: u32) -> Self {
        Self::fixed(scale)
    }
}

impl From<Scale> for FormatSpec {
    fn from(scale: Scale) -> Self {
        Self::default().with_scale(scale)
    }
}

// ============================================================================
// Mini-Language Compatibility
// ============================================================================

impl FromStr for FormatSpec {
    type Err = RadixError;

    /// Parse the familiar format mini-language.
    ///
    /// Grammar: `[+|-][#][0][width][,|_][.precision][type]` where type is
    /// one of `d f F e E g G`. Width counts integer digits only.
    ///
    /// # Examples
    /// - "3" -> fixed scale 3
    /// - ",d" -> grouping, scale 0
    /// - "+.2e" -> sign always, scientific, scale 2
    /// - "04" after a flag, e.g. "+04d" -> width 4
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RadixError::InvalidFormat(s.to_string());
        let text = s.trim();
        let mut spec = FormatSpec::default();

        if text.is_empty() {
            return Ok(spec);
        }
        if text.bytes().all(|b| b.is_ascii_digit()) {
            let scale = text.parse().map_err(|_| invalid())?;
            return Ok(FormatSpec::fixed(scale));
        }

        let mut rest = text;
        if let Some(r) = rest.strip_prefix('+') {
            spec.sign = SignDisplay::Always;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('-') {
            rest = r;
        }
        if let Some(r) = rest.strip_prefix('#') {
            spec.keep_point = true;
            rest = r;
        }

        let (width, r) = take_digits(rest);
        if let Some(width) = width {
            spec.width = width.parse().map_err(|_| invalid())?;
        }
        rest = r;

        if let Some(r) = rest.strip_prefix([',', '_']) {
            spec.grouping = true;
            rest = r;
        }

        let mut precision = None;
        if let Some(r) = rest.strip_prefix('.') {
            let (digits, r) = take_digits(r);
            let digits = digits.ok_or_else(invalid)?;
            precision = Some(digits.parse::<u32>().map_err(|_| invalid())?);
            rest = r;
        }

        spec.scale = match rest {
            "" | "g" | "G" => precision.map_or(Scale::Auto, Scale::Fixed),
            "d" if precision.is_none() => Scale::Fixed(0),
            "f" | "F" => Scale::Fixed(precision.unwrap_or(DEFAULT_TYPED_PRECISION)),
            "e" | "E" => {
                spec.notation = Notation::Scientific;
                Scale::Fixed(precision.unwrap_or(DEFAULT_TYPED_PRECISION))
            },
            _ => return Err(invalid()),
        };

        Ok(spec)
    }
}

/// Split off a leading run of ASCII digits, if any.
fn take_digits(text: &str) -> (Option<&str>, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        (None, text)
    } else {
        (Some(&text[..end]), &text[end..])
    }
}
