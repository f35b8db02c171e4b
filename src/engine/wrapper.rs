// ============================================================================
// Radix Wrapper
// Display adapter binding a number to an alphabet
// ============================================================================

use super::{decoder, encoder};
use crate::domain::{FormatSpec, RadixAlphabet, Scale, SignDisplay};
use crate::numeric::{Number, RadixError, RadixResult};
use std::fmt;

/// A number paired with the alphabet it renders in.
///
/// `Display` encodes with the default format and understands the standard
/// formatter flags: `+` shows the positive sign, `.N` fixes the scale, `#`
/// keeps the separator on whole non-integer values, and width, fill and
/// alignment pad the encoded text.
///
/// # Example
/// ```
/// use num_radix::prelude::*;
///
/// let dozenal = RadixAlphabet::dozenal();
/// assert_eq!(format!("{:+}", dozenal.wrap(13)), "+11");
/// assert_eq!(format!("{:.2}", dozenal.wrap(0.5)), "0;60");
/// assert_eq!(format!("[{:>4}]", dozenal.wrap(143)), "[  EE]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadixWrapper<'a> {
    number: Number,
    alphabet: &'a RadixAlphabet,
}

impl<'a> RadixWrapper<'a> {
    pub fn new(number: impl Into<Number>, alphabet: &'a RadixAlphabet) -> Self {
        Self {
            number: number.into(),
            alphabet,
        }
    }

    #[inline]
    pub fn number(&self) -> Number {
        self.number
    }

    #[inline]
    pub fn alphabet(&self) -> &'a RadixAlphabet {
        self.alphabet
    }

    /// Encode with an explicit format.
    pub fn format(&self, spec: &FormatSpec) -> RadixResult<String> {
        encoder::encode(self.alphabet, self.number, spec)
    }

    /// Encode with a format given in the mini-language, e.g. `",d"` or `".3e"`.
    pub fn format_str(&self, spec: &str) -> RadixResult<String> {
        let spec: FormatSpec = spec.parse()?;
        self.format(&spec)
    }

    /// Format derived from the flags of a `Formatter`.
    fn spec_from(f: &fmt::Formatter<'_>) -> Result<FormatSpec, fmt::Error> {
        let mut spec = FormatSpec::default().with_point(f.alternate());
        if f.sign_plus() {
            spec = spec.with_sign(SignDisplay::Always);
        }
        if let Some(precision) = f.precision() {
            let scale = u32::try_from(precision).map_err(|_| fmt::Error)?;
            spec = spec.with_scale(Scale::Fixed(scale));
        }
        Ok(spec)
    }
}

impl fmt::Display for RadixWrapper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = Self::spec_from(f)?;
        let encoded = self.format(&spec).map_err(|_| fmt::Error)?;

        // Formatter::pad would treat the precision as a truncation length
        let width = f.width().unwrap_or(0);
        let len = encoded.chars().count();
        if len >= width {
            return f.write_str(&encoded);
        }

        let padding = width - len;
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Left) => (0, padding),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Right) | None => (padding, 0),
        };
        let fill = f.fill();
        for _ in 0..before {
            fmt::Write::write_char(f, fill)?;
        }
        f.write_str(&encoded)?;
        for _ in 0..after {
            fmt::Write::write_char(f, fill)?;
        }
        Ok(())
    }
}

// ============================================================================
// Alphabet Convenience
// ============================================================================

impl RadixAlphabet {
    /// Bind `number` to this alphabet for formatting.
    pub fn wrap(&self, number: impl Into<Number>) -> RadixWrapper<'_> {
        RadixWrapper::new(number, self)
    }

    /// Decode `text` now and bind the result to this alphabet.
    pub fn wrap_str(&self, text: &str) -> Result<RadixWrapper<'_>, RadixError> {
        Ok(RadixWrapper::new(decoder::decode(self, text)?, self))
    }

    /// Wrap every element of `numbers`.
    pub fn wrap_all<I, N>(&self, numbers: I) -> Vec<RadixWrapper<'_>>
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        numbers.into_iter().map(|n| self.wrap(n)).collect()
    }
}
