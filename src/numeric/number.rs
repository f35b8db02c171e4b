// ============================================================================
// Number
// Native-width numeric values accepted by the encoder and produced by decode
// ============================================================================

use super::errors::{RadixError, RadixResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// A number in native width.
///
/// `Integer` covers every primitive integer type, `Float` is an IEEE-754
/// double and `Decimal` is an exact base-10 value with a 96-bit mantissa.
/// Decoding yields `Integer` for plain digit runs and `Float` as soon as a
/// fractional part or an exponent is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i128),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    /// True when the value carries a negative sign, including `-0.0`.
    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(value) => *value < 0,
            Number::Float(value) => value.is_sign_negative(),
            Number::Decimal(value) => value.is_sign_negative(),
        }
    }

    /// False only for NaN and infinite floats.
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Float(value) => value.is_finite(),
            _ => true,
        }
    }

    /// True for the `Integer` variant.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(value) => *value == 0,
            Number::Float(value) => *value == 0.0,
            Number::Decimal(value) => value.is_zero(),
        }
    }

    /// Absolute value. `i128::MIN` has no positive counterpart.
    pub fn abs(self) -> RadixResult<Self> {
        match self {
            Number::Integer(value) => value
                .checked_abs()
                .map(Number::Integer)
                .ok_or(RadixError::Overflow),
            Number::Float(value) => Ok(Number::Float(value.abs())),
            Number::Decimal(value) => Ok(Number::Decimal(value.abs())),
        }
    }

    /// Lossy conversion to `f64`.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(value) => *value as f64,
            Number::Float(value) => *value,
            Number::Decimal(value) => value.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Exact integer value, if there is one.
    pub fn to_i128(&self) -> Option<i128> {
        match self {
            Number::Integer(value) => Some(*value),
            Number::Float(value) => {
                // 2^127 is exactly representable, so the bound check is exact
                if value.fract() == 0.0 && value.abs() < 2f64.powi(127) {
                    Some(*value as i128)
                } else {
                    None
                }
            },
            Number::Decimal(value) => {
                if value.fract().is_zero() {
                    value.to_i128()
                } else {
                    None
                }
            },
        }
    }
}

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Number::Integer(0)
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Decimal> for Number {
    #[inline]
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

impl std::str::FromStr for Number {
    type Err = RadixError;

    /// Parse a base-10 literal.
    ///
    /// # Examples
    /// - "42" -> Integer(42)
    /// - "-0.5" -> Float(-0.5)
    /// - "6.02e23" -> Float(6.02e23)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i128>() {
            return Ok(Number::Integer(value));
        }
        s.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| RadixError::InvalidDigit {
                symbol: s.to_string(),
                position: 0,
            })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{}", value),
            // Debug keeps the trailing ".0" so floats stay recognisable
            Number::Float(value) => write!(f, "{:?}", value),
            Number::Decimal(value) => write!(f, "{}", value),
        }
    }
}
