// ============================================================================
// Radix Alphabet
// Immutable digit alphabet plus separator, sign, group and exponent symbols
// ============================================================================

use crate::numeric::{RadixError, RadixResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value of a single digit (an index into the alphabet).
pub type Digit = u32;

/// Separator placed between integer and fractional digits
pub const DEFAULT_SEPARATOR: &str = ".";
/// Prefix of negative numbers
pub const DEFAULT_NEGATIVE_SIGN: &str = "-";
/// Prefix of non-negative numbers when a sign is requested
pub const DEFAULT_POSITIVE_SIGN: &str = "+";
/// Separator between integer digit triples
pub const DEFAULT_GROUP_SEPARATOR: &str = ",";
/// Marker preceding the exponent in scientific notation
pub const DEFAULT_EXPONENT_MARKER: &str = "e";
/// Exponent marker used when the digits already contain `e`
pub const FALLBACK_EXPONENT_MARKER: &str = "^";

/// Symbol pool of the generic `by_base` alphabet: 0-9, A-Z, a-z.
pub const SYMBOL_POOL: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Largest base `by_base` can build from [`SYMBOL_POOL`].
pub const MAX_POOL_BASE: usize = 62;

// ============================================================================
// Radix Alphabet
// ============================================================================

/// The digit alphabet of a positional numeral system.
///
/// The number of digit symbols is the base; index 0 is the zero digit.
/// Symbols may span several characters, but no symbol is a prefix of
/// another, so any conforming string tokenizes in exactly one way.
///
/// Instances are immutable once built and can be shared freely between
/// threads.
///
/// # Example
/// ```
/// use num_radix::prelude::*;
///
/// let dozenal = RadixAlphabet::builder("0123456789XE")
///     .separator(";")
///     .build()
///     .unwrap();
/// assert_eq!(dozenal.base(), 12);
/// assert_eq!(dozenal.encode(13, &FormatSpec::default()).unwrap(), "11");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RadixAlphabetBuilder"))]
pub struct RadixAlphabet {
    digits: Vec<String>,
    separator: String,
    negative_sign: String,
    positive_sign: String,
    group_separator: String,
    exponent_marker: String,
}

impl RadixAlphabet {
    /// Create an alphabet with one digit per character and default symbols.
    ///
    /// # Errors
    /// Returns `Config` if the digits are empty or collide with each other
    /// or with the default symbols.
    pub fn new(digits: &str) -> RadixResult<Self> {
        RadixAlphabetBuilder::new(digits).build()
    }

    /// Start building an alphabet with custom symbols.
    pub fn builder(digits: &str) -> RadixAlphabetBuilder {
        RadixAlphabetBuilder::new(digits)
    }

    /// Alphabet made of the first `base` symbols of 0-9, A-Z, a-z.
    ///
    /// # Errors
    /// Returns `Range` if `base` is 0 or larger than 62.
    pub fn by_base(base: usize) -> RadixResult<Self> {
        RadixAlphabetBuilder::by_base(base)?.build()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of digits.
    #[inline]
    pub fn base(&self) -> usize {
        self.digits.len()
    }

    /// Digit symbols, zero first.
    #[inline]
    pub fn digits(&self) -> &[String] {
        &self.digits
    }

    /// Symbol of the digit with the given value, or `None` past the base.
    #[inline]
    pub fn symbol(&self, value: Digit) -> Option<&str> {
        self.digits.get(value as usize).map(String::as_str)
    }

    /// Symbol of a digit the engine produced, always below the base.
    #[inline]
    pub(crate) fn digit(&self, value: Digit) -> &str {
        &self.digits[value as usize]
    }

    /// The zero digit.
    #[inline]
    pub fn zero(&self) -> &str {
        &self.digits[0]
    }

    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[inline]
    pub fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    #[inline]
    pub fn positive_sign(&self) -> &str {
        &self.positive_sign
    }

    #[inline]
    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }

    #[inline]
    pub fn exponent_marker(&self) -> &str {
        &self.exponent_marker
    }

    /// Match a digit symbol at the start of `text`.
    ///
    /// Returns the digit value and the byte length of the matched symbol.
    pub fn lookup_digit(&self, text: &str) -> Option<(Digit, usize)> {
        self.digits
            .iter()
            .position(|symbol| text.starts_with(symbol.as_str()))
            .map(|index| (index as Digit, self.digits[index].len()))
    }

    /// Convert into a builder carrying the same symbols.
    pub fn to_builder(&self) -> RadixAlphabetBuilder {
        RadixAlphabetBuilder {
            digits: self.digits.clone(),
            separator: Some(self.separator.clone()),
            negative_sign: Some(self.negative_sign.clone()),
            positive_sign: Some(self.positive_sign.clone()),
            group_separator: Some(self.group_separator.clone()),
            exponent_marker: Some(self.exponent_marker.clone()),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`RadixAlphabet`].
///
/// Unset symbols fall back to the defaults. The exponent marker falls back
/// to `^` instead of `e` when `e` is one of the digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RadixAlphabetBuilder {
    digits: Vec<String>,
    separator: Option<String>,
    negative_sign: Option<String>,
    positive_sign: Option<String>,
    group_separator: Option<String>,
    exponent_marker: Option<String>,
}

impl RadixAlphabetBuilder {
    /// One digit per character of `digits`.
    pub fn new(digits: &str) -> Self {
        Self::from_symbols(digits.chars().map(String::from))
    }

    /// Digits given as individual, possibly multi-character, symbols.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            digits: symbols.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// First `base` symbols of 0-9, A-Z, a-z.
    ///
    /// # Errors
    /// Returns `Range` if `base` is 0 or larger than 62.
    pub fn by_base(base: usize) -> RadixResult<Self> {
        if base == 0 || base > MAX_POOL_BASE {
            return Err(RadixError::Range {
                requested: base,
                min: 1,
                max: Some(MAX_POOL_BASE),
            });
        }
        Ok(Self::new(&SYMBOL_POOL[..base]))
    }

    /// Builder method: Set the integer/fraction separator
    pub fn separator(mut self, symbol: impl Into<String>) -> Self {
        self.separator = Some(symbol.into());
        self
    }

    /// Builder method: Set the negative sign
    pub fn negative_sign(mut self, symbol: impl Into<String>) -> Self {
        self.negative_sign = Some(symbol.into());
        self
    }

    /// Builder method: Set the positive sign
    pub fn positive_sign(mut self, symbol: impl Into<String>) -> Self {
        self.positive_sign = Some(symbol.into());
        self
    }

    /// Builder method: Set the digit group separator
    pub fn group_separator(mut self, symbol: impl Into<String>) -> Self {
        self.group_separator = Some(symbol.into());
        self
    }

    /// Builder method: Set the exponent marker
    pub fn exponent_marker(mut self, symbol: impl Into<String>) -> Self {
        self.exponent_marker = Some(symbol.into());
        self
    }

    /// Validate the symbols and produce the alphabet.
    ///
    /// # Errors
    /// Returns `Config` if there are no digits, if a symbol is empty, or if
    /// two symbols are equal or one is a prefix of another.
    pub fn build(self) -> RadixResult<RadixAlphabet> {
        let alphabet = self.assemble();
        validate(&alphabet)?;
        tracing::trace!(base = alphabet.base(), "radix alphabet built");
        Ok(alphabet)
    }

    /// Resolve defaults without validating. Only for the built-in presets,
    /// whose symbols are covered by tests.
    pub(crate) fn assemble(self) -> RadixAlphabet {
        let exponent_marker = self.exponent_marker.unwrap_or_else(|| {
            if self.digits.iter().any(|d| d == DEFAULT_EXPONENT_MARKER) {
                FALLBACK_EXPONENT_MARKER.to_string()
            } else {
                DEFAULT_EXPONENT_MARKER.to_string()
            }
        });

        RadixAlphabet {
            digits: self.digits,
            separator: self
                .separator
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            negative_sign: self
                .negative_sign
                .unwrap_or_else(|| DEFAULT_NEGATIVE_SIGN.to_string()),
            positive_sign: self
                .positive_sign
                .unwrap_or_else(|| DEFAULT_POSITIVE_SIGN.to_string()),
            group_separator: self
                .group_separator
                .unwrap_or_else(|| DEFAULT_GROUP_SEPARATOR.to_string()),
            exponent_marker,
        }
    }
}

impl TryFrom<RadixAlphabetBuilder> for RadixAlphabet {
    type Error = RadixError;

    fn try_from(builder: RadixAlphabetBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

// ============================================================================
// Validation
// ============================================================================

fn validate(alphabet: &RadixAlphabet) -> RadixResult<()> {
    if alphabet.digits.is_empty() {
        return Err(RadixError::Config("alphabet has no digits".to_string()));
    }

    let markers = [
        ("separator", alphabet.separator.as_str()),
        ("negative sign", alphabet.negative_sign.as_str()),
        ("positive sign", alphabet.positive_sign.as_str()),
        ("group separator", alphabet.group_separator.as_str()),
        ("exponent marker", alphabet.exponent_marker.as_str()),
    ];
    let symbols: Vec<(&str, &str)> = alphabet
        .digits
        .iter()
        .map(|d| ("digit", d.as_str()))
        .chain(markers)
        .collect();

    for (i, (role, symbol)) in symbols.iter().enumerate() {
        if symbol.is_empty() {
            return Err(RadixError::Config(format!("{} is empty", role)));
        }
        for (other_role, other) in &symbols[i + 1..] {
            if symbol == other {
                return Err(RadixError::Config(format!(
                    "{} '{}' collides with {} '{}'",
                    role, symbol, other_role, other
                )));
            }
            if !other.is_empty() && (symbol.starts_with(other) || other.starts_with(symbol)) {
                return Err(RadixError::Config(format!(
                    "{} '{}' and {} '{}' are ambiguous: one is a prefix of the other",
                    role, symbol, other_role, other
                )));
            }
        }
    }

    Ok(())
}
