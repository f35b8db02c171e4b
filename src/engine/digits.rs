// ============================================================================
// Digit Buffer
// Owned integer/fraction digit sequences with half-up carry propagation
// ============================================================================

use crate::domain::Digit;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use smallvec::SmallVec;

/// Inline capacity covers a full u128 in base 16 and most fractions
type Digits = SmallVec<[Digit; 32]>;

/// Digits of a non-negative number, most significant first.
///
/// The integer part always holds at least one digit; the fractional part
/// may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DigitBuffer {
    integer: Digits,
    fraction: Digits,
}

impl DigitBuffer {
    /// Expand `value` by repeated division. Zero yields a single zero digit.
    pub fn from_integer(mut value: BigUint, base: u32) -> Self {
        let mut integer = Digits::new();

        if value.is_zero() {
            integer.push(0);
        }
        while !value.is_zero() {
            let digit = (&value % base).to_u32().unwrap_or(0);
            integer.push(digit);
            value /= base;
        }
        integer.reverse();

        Self {
            integer,
            fraction: Digits::new(),
        }
    }

    #[inline]
    pub fn integer(&self) -> &[Digit] {
        &self.integer
    }

    #[inline]
    pub fn fraction(&self) -> &[Digit] {
        &self.fraction
    }

    /// Integer digits that count as significant (none for a lone zero).
    #[inline]
    pub fn significant_integer_digits(&self) -> usize {
        if self.integer.as_slice() == [0] {
            0
        } else {
            self.integer.len()
        }
    }

    #[inline]
    pub fn push_fraction(&mut self, digit: Digit) {
        self.fraction.push(digit);
    }

    /// Add one unit in the last place.
    ///
    /// Walks from the least significant digit leftwards through the
    /// fraction and then the integer digits, stopping at the first digit
    /// that absorbs the carry. Returns `true` when the carry escaped the
    /// most significant digit and a new leading 1 was inserted.
    pub fn round_up(&mut self, base: u32) -> bool {
        let top = base - 1;

        for digit in self
            .fraction
            .iter_mut()
            .rev()
            .chain(self.integer.iter_mut().rev())
        {
            if *digit == top {
                *digit = 0;
            } else {
                *digit += 1;
                return false;
            }
        }

        self.integer.insert(0, 1);
        true
    }

    /// Move the point one digit to the left (divide by the base).
    ///
    /// Used after a carry overflowed a normalised scientific mantissa; the
    /// least significant integer digit becomes the first fractional digit.
    pub fn shift_point_left(&mut self) {
        if self.integer.len() > 1 {
            if let Some(digit) = self.integer.pop() {
                self.fraction.insert(0, digit);
            }
        } else {
            self.fraction.insert(0, self.integer[0]);
            self.integer[0] = 0;
        }
    }

    /// Keep at most `len` fractional digits, discarding the rest.
    #[inline]
    pub fn truncate_fraction(&mut self, len: usize) {
        self.fraction.truncate(len);
    }

    /// Drop trailing zero digits of the fraction.
    pub fn trim_fraction_zeros(&mut self) {
        while self.fraction.last() == Some(&0) {
            self.fraction.pop();
        }
    }

    /// Pad the integer part with leading zeros up to `width` digits.
    pub fn pad_integer(&mut self, width: usize) {
        if self.integer.len() < width {
            let padding = width - self.integer.len();
            self.integer.insert_many(0, std::iter::repeat(0).take(padding));
        }
    }
}
