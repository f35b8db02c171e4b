// ============================================================================
// Fraction Source
// Exact digit-by-digit expansion of rational remainders
// ============================================================================

use crate::domain::Digit;
use crate::numeric::{Number, RadixError, RadixResult};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Fractional remainder in [0, 1) of `|number| * base^-exponent`, held as an
/// exact big rational that yields one digit per step.
///
/// Every supported number is rational (a double is a dyadic fraction, a
/// decimal is a mantissa over a power of ten), so the expansion never
/// rounds, even for subnormal doubles or large exponents.
#[derive(Debug, Clone)]
pub(crate) struct RationalFraction {
    numerator: BigUint,
    denominator: BigUint,
    /// Half the spacing to the neighbouring doubles, in units of the
    /// denominator. Only doubles carry one.
    margin: Option<BigUint>,
    base: u32,
}

impl RationalFraction {
    /// Split `|number| * base^-exponent` into its integer part and a source
    /// for the fractional digits.
    pub fn split(number: Number, base: u32, exponent: i32) -> (BigUint, Self) {
        let (mut numerator, mut denominator, mut margin) = match number {
            Number::Integer(value) => (BigUint::from(value.unsigned_abs()), BigUint::one(), None),
            Number::Float(value) => float_parts(value),
            Number::Decimal(value) => {
                let mantissa = BigUint::from(value.mantissa().unsigned_abs());
                (mantissa, BigUint::from(10u32).pow(value.scale()), None)
            },
        };

        let power = BigUint::from(base).pow(exponent.unsigned_abs());
        if exponent >= 0 {
            denominator *= &power;
        } else {
            numerator *= &power;
            if let Some(margin) = margin.as_mut() {
                *margin *= &power;
            }
        }

        let whole = &numerator / &denominator;
        let numerator = numerator - &whole * &denominator;
        let fraction = Self {
            numerator,
            denominator,
            margin,
            base,
        };
        (whole, fraction)
    }

    /// Multiply by the base, return the integer part and keep the rest.
    pub fn next_digit(&mut self) -> RadixResult<Digit> {
        let product = &self.numerator * self.base;
        let digit = &product / &self.denominator;
        self.numerator = product - &digit * &self.denominator;
        if let Some(margin) = self.margin.as_mut() {
            *margin *= self.base;
        }
        digit.to_u32().ok_or(RadixError::Overflow)
    }

    /// True once the remainder is exactly zero.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.numerator.is_zero()
    }

    /// True when the remainder is at least one half.
    #[inline]
    pub fn at_least_half(&self) -> bool {
        (&self.numerator << 1usize) >= self.denominator
    }

    /// Shortest-output check after the latest digit: `Some(round_up)` once
    /// the digits emitted so far identify the source double uniquely.
    pub fn settle(&self) -> Option<bool> {
        let margin = self.margin.as_ref()?;
        let low = &self.numerator < margin;
        let high = &self.numerator + margin > self.denominator;

        match (low, high) {
            (false, false) => None,
            (true, false) => Some(false),
            (false, true) => Some(true),
            (true, true) => Some(self.at_least_half()),
        }
    }
}

// ============================================================================
// IEEE-754 Helpers
// ============================================================================

/// `|value|` as numerator over denominator, plus the half-gap margin over
/// the same denominator. Zero has no margin.
fn float_parts(value: f64) -> (BigUint, BigUint, Option<BigUint>) {
    let Some(gap) = half_gap_exponent(value) else {
        return (BigUint::zero(), BigUint::one(), None);
    };
    let (mantissa, exponent) = decompose(value);

    // Counted in units of 2^gap, which always lies below the value's lsb
    let mut unit = BigUint::one();
    let mut denominator = BigUint::one();
    if gap >= 0 {
        unit <<= gap as usize;
    } else {
        denominator <<= gap.unsigned_abs() as usize;
    }
    let numerator = (BigUint::from(mantissa) << (exponent - gap) as usize) * &unit;

    (numerator, denominator, Some(unit))
}

/// Split a finite double into an integer mantissa and a binary exponent,
/// `|value| = mantissa * 2^exponent`.
fn decompose(value: f64) -> (u64, i32) {
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    }
}

/// Binary exponent of half the distance from `value` to its nearest
/// neighbour double. For powers of two the gap below is half the gap
/// above; the smaller is used.
fn half_gap_exponent(value: f64) -> Option<i32> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    let (mantissa, exponent) = decompose(value);
    let narrower_below = mantissa == 1u64 << 52 && exponent > -1074;
    Some(if narrower_below { exponent - 2 } else { exponent - 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn expand(source: &mut RationalFraction, count: usize) -> Vec<Digit> {
        (0..count).map(|_| source.next_digit().unwrap()).collect()
    }

    fn fraction(number: impl Into<Number>, base: u32) -> RationalFraction {
        RationalFraction::split(number.into(), base, 0).1
    }

    #[test]
    fn test_float_exact_in_power_of_two_base() {
        let mut source = fraction(0.625, 2);
        assert_eq!(expand(&mut source, 3), vec![1, 0, 1]);
        assert!(source.is_exhausted());
    }

    #[test]
    fn test_float_decimal_digits() {
        let mut source = fraction(0.25, 10);
        assert_eq!(expand(&mut source, 2), vec![2, 5]);
        assert!(source.is_exhausted());
        assert!(!source.at_least_half());
    }

    #[test]
    fn test_half() {
        assert!(fraction(0.5, 12).at_least_half());
        assert!(!fraction(0.49, 12).at_least_half());
        assert!(fraction(Decimal::new(5, 1), 3).at_least_half());
    }

    #[test]
    fn test_float_integer_part() {
        let (whole, source) = RationalFraction::split(Number::Float(1e40), 10, 0);
        let expected: BigUint = "10000000000000000303786028427003666890752".parse().unwrap();
        assert_eq!(whole, expected);
        assert!(source.is_exhausted());
    }

    #[test]
    fn test_split_with_exponent() {
        let (whole, mut source) = RationalFraction::split(Number::Float(1234.5), 10, 3);
        assert_eq!(whole, BigUint::from(1u32));
        assert_eq!(expand(&mut source, 4), vec![2, 3, 4, 5]);
        assert!(source.is_exhausted());

        let (whole, mut source) = RationalFraction::split(Number::Float(0.375), 2, -2);
        assert_eq!(whole, BigUint::from(1u32));
        assert_eq!(expand(&mut source, 1), vec![1]);
        assert!(source.is_exhausted());

        let (whole, mut source) = RationalFraction::split(Number::Integer(-299_792_458), 10, 8);
        assert_eq!(whole, BigUint::from(2u32));
        assert_eq!(expand(&mut source, 8), vec![9, 9, 7, 9, 2, 4, 5, 8]);
        assert!(source.is_exhausted());
    }

    #[test]
    fn test_settles_on_shortest_digits() {
        // 0.1 is not exact in binary, but one decimal digit identifies it
        let mut source = fraction(0.1, 10);
        assert_eq!(source.next_digit().unwrap(), 1);
        assert_eq!(source.settle(), Some(false));
    }

    #[test]
    fn test_settles_with_round_up() {
        // 0.3 is stored as 0.29999999999999998889...
        let mut source = fraction(0.3, 10);
        let mut digits = Vec::new();
        let round_up = loop {
            digits.push(source.next_digit().unwrap());
            if let Some(round_up) = source.settle() {
                break round_up;
            }
        };
        assert_eq!(digits, vec![2]);
        assert!(round_up);
    }

    #[test]
    fn test_subnormal_is_exact() {
        let mut source = fraction(f64::from_bits(1), 2);
        let digits = expand(&mut source, 1074);
        assert_eq!(digits.iter().filter(|&&d| d == 1).count(), 1);
        assert_eq!(digits.last(), Some(&1));
        assert!(source.is_exhausted());
    }

    #[test]
    fn test_decimal_in_binary() {
        // 0.1 in binary is 0.000110011...
        let mut source = fraction(Decimal::new(1, 1), 2);
        assert_eq!(expand(&mut source, 9), vec![0, 0, 0, 1, 1, 0, 0, 1, 1]);
        assert!(!source.is_exhausted());
        assert_eq!(source.settle(), None);

        let mut exact = fraction(Decimal::new(-75, 2), 2);
        assert_eq!(expand(&mut exact, 2), vec![1, 1]);
        assert!(exact.is_exhausted());
    }

    #[test]
    fn test_integer_has_no_fraction() {
        let (whole, mut source) = RationalFraction::split(Number::Integer(i128::MIN), 16, 0);
        assert_eq!(whole, BigUint::from(1u128 << 127));
        assert!(source.is_exhausted());
        assert_eq!(source.next_digit().unwrap(), 0);
    }

    #[test]
    fn test_zero_has_no_margin() {
        let (whole, source) = RationalFraction::split(Number::Float(0.0), 10, 0);
        assert!(whole.is_zero());
        assert!(source.is_exhausted());
        assert_eq!(source.settle(), None);
    }

    #[test]
    fn test_decompose() {
        assert_eq!(decompose(1.0), (1u64 << 52, -52));
        assert_eq!(decompose(0.5), (1u64 << 52, -53));
        assert_eq!(decompose(f64::from_bits(1)), (1, -1074));
        assert_eq!(decompose(-3.0), (3u64 << 51, -51));
    }
}
