// ============================================================================
// Radix Errors
// Error types for alphabet construction, encoding and decoding
// ============================================================================

use std::fmt;

/// Errors that can occur while building alphabets or transcoding numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RadixError {
    /// Alphabet symbols are empty, colliding or ambiguous
    Config(String),
    /// Requested base is outside the supported range
    Range {
        /// The base that was asked for
        requested: usize,
        /// Smallest base the operation supports
        min: usize,
        /// Largest base the operation supports, if bounded
        max: Option<usize>,
    },
    /// A symbol in the input is not a digit, sign or separator
    InvalidDigit {
        /// The offending text (one character, or the unparsed remainder)
        symbol: String,
        /// Character offset in the trimmed input
        position: usize,
    },
    /// NaN or infinity cannot be encoded
    NonFinite,
    /// Value does not fit the native integer width
    Overflow,
    /// Format mini-language string could not be parsed
    InvalidFormat(String),
    /// No preset with the given name
    UnknownPreset(String),
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadixError::Config(reason) => write!(f, "invalid alphabet: {}", reason),
            RadixError::Range {
                requested,
                min,
                max: Some(max),
            } => write!(f, "base {} out of range: expected {}..={}", requested, min, max),
            RadixError::Range {
                requested,
                min,
                max: None,
            } => write!(f, "base {} out of range: expected at least {}", requested, min),
            RadixError::InvalidDigit { symbol, position } => {
                write!(f, "invalid digit '{}' at position {}", symbol, position)
            },
            RadixError::NonFinite => write!(f, "cannot encode a non-finite value"),
            RadixError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds native integer width")
            },
            RadixError::InvalidFormat(spec) => write!(f, "invalid format specification '{}'", spec),
            RadixError::UnknownPreset(name) => write!(f, "unknown radix preset '{}'", name),
        }
    }
}

impl std::error::Error for RadixError {}

/// Result type alias for radix operations
pub type RadixResult<T> = Result<T, RadixError>;
