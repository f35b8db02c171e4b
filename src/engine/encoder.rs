// ============================================================================
// Encoder
// Number -> digit string under a format specification
// ============================================================================

use super::digits::DigitBuffer;
use super::fraction::RationalFraction;
use crate::domain::{FormatSpec, Notation, RadixAlphabet, Scale, SignDisplay};
use crate::numeric::{Number, RadixError, RadixResult};
use num_bigint::BigUint;
use num_traits::Zero;

/// Digits of the exponent in scientific notation, not counting its sign
pub const EXPONENT_WIDTH: usize = 2;

/// Upper bound on fractional digits emitted by automatic scale
pub const MAX_AUTO_FRACTION_DIGITS: usize = 1100;

/// Significand precision of an IEEE-754 double
const F64_MANTISSA_BITS: u32 = 53;

/// Mantissa width of rust_decimal::Decimal
const DECIMAL_MANTISSA_BITS: u32 = 96;

/// Width of the integer variant
const INTEGER_MANTISSA_BITS: u32 = 128;

/// Encode `number` in the digits of `alphabet`.
///
/// # Errors
/// - `NonFinite` for NaN and infinities
/// - `Range` if the alphabet has fewer than two digits
pub fn encode(alphabet: &RadixAlphabet, number: Number, spec: &FormatSpec) -> RadixResult<String> {
    if !number.is_finite() {
        return Err(RadixError::NonFinite);
    }
    let base = positional_base(alphabet)?;

    let (digits, exponent) = match spec.notation {
        Notation::Plain => (expand(number, base, spec.scale)?, None),
        Notation::Scientific => {
            let (digits, exponent) = expand_scientific(number, base, spec.scale)?;
            (digits, Some(exponent))
        },
    };

    let mut output = render(alphabet, digits, number, spec);

    if let Some(exponent) = exponent {
        let exponent_spec = FormatSpec::default()
            .with_sign(SignDisplay::Always)
            .with_width(EXPONENT_WIDTH);
        output.push_str(alphabet.exponent_marker());
        output.push_str(&encode(alphabet, Number::Integer(exponent as i128), &exponent_spec)?);
    }

    tracing::trace!(base, ?number, %output, "encoded");
    Ok(output)
}

/// Base as u32, rejecting alphabets that cannot express positional notation.
pub(crate) fn positional_base(alphabet: &RadixAlphabet) -> RadixResult<u32> {
    let base = alphabet.base();
    if base < 2 {
        return Err(RadixError::Range {
            requested: base,
            min: 2,
            max: None,
        });
    }
    u32::try_from(base).map_err(|_| RadixError::Range {
        requested: base,
        min: 2,
        max: Some(u32::MAX as usize),
    })
}

// ============================================================================
// Digit Expansion
// ============================================================================

/// Expand `|number|` into integer and fractional digits.
fn expand(number: Number, base: u32, scale: Scale) -> RadixResult<DigitBuffer> {
    let (whole, mut source) = RationalFraction::split(number, base, 0);
    let mut digits = DigitBuffer::from_integer(whole, base);
    expand_fraction(&mut digits, &mut source, base, scale, mantissa_bits(number))?;
    Ok(digits)
}

/// Binary precision of the variant, which bounds the digits worth emitting.
fn mantissa_bits(number: Number) -> u32 {
    match number {
        Number::Integer(_) => INTEGER_MANTISSA_BITS,
        Number::Float(_) => F64_MANTISSA_BITS,
        Number::Decimal(_) => DECIMAL_MANTISSA_BITS,
    }
}

/// Append fractional digits from `source` and round half-up.
///
/// A fixed scale emits exactly that many digits. Automatic scale stops as
/// soon as the digits identify a double, when the remainder is exhausted,
/// or once the significant digit budget for the source precision is spent;
/// trailing zeros are then trimmed.
fn expand_fraction(
    digits: &mut DigitBuffer,
    source: &mut RationalFraction,
    base: u32,
    scale: Scale,
    mantissa_bits: u32,
) -> RadixResult<()> {
    match scale {
        Scale::Fixed(scale) => {
            for _ in 0..scale {
                digits.push_fraction(source.next_digit()?);
            }
            if source.at_least_half() {
                digits.round_up(base);
            }
        },
        Scale::Auto => {
            let budget = significant_digit_budget(base, mantissa_bits);
            let mut significant = digits.significant_integer_digits();
            let mut settled = None;

            while !source.is_exhausted()
                && significant < budget
                && digits.fraction().len() < MAX_AUTO_FRACTION_DIGITS
            {
                let digit = source.next_digit()?;
                digits.push_fraction(digit);
                if significant > 0 || digit != 0 {
                    significant += 1;
                }
                settled = source.settle();
                if settled.is_some() {
                    break;
                }
            }

            if settled.unwrap_or_else(|| source.at_least_half()) {
                digits.round_up(base);
            }
            digits.trim_fraction_zeros();
        },
    }
    Ok(())
}

/// Significant digits needed to pin down a value of `mantissa_bits`
/// binary precision in `base`: ceil(bits * log_base 2) + 1.
fn significant_digit_budget(base: u32, mantissa_bits: u32) -> usize {
    let digits = mantissa_bits as f64 * std::f64::consts::LN_2 / (base as f64).ln();
    digits.ceil() as usize + 1
}

// ============================================================================
// Scientific Notation
// ============================================================================

/// Expand `|number|` as a mantissa in [1, base) and an exponent.
fn expand_scientific(number: Number, base: u32, scale: Scale) -> RadixResult<(DigitBuffer, i64)> {
    if number.is_zero() {
        return Ok((expand(number, base, scale)?, 0));
    }

    // The logarithm may land one off either way; the exact split corrects it
    let radix = BigUint::from(base);
    let mut exponent = (number.to_f64().abs().ln() / (base as f64).ln()).floor() as i32;
    let (lead, mut source) = loop {
        let (whole, source) = RationalFraction::split(number, base, exponent);
        if whole >= radix {
            exponent += 1;
        } else if whole.is_zero() {
            exponent -= 1;
        } else {
            break (whole, source);
        }
    };

    let mut digits = DigitBuffer::from_integer(lead, base);
    expand_fraction(&mut digits, &mut source, base, scale, mantissa_bits(number))?;
    let mut exponent = exponent as i64;

    // Rounding carried the mantissa up to the base itself
    if digits.integer().len() > 1 {
        digits.shift_point_left();
        exponent += 1;
        match scale {
            Scale::Fixed(scale) => digits.truncate_fraction(scale as usize),
            Scale::Auto => digits.trim_fraction_zeros(),
        }
    }

    Ok((digits, exponent))
}

// ============================================================================
// Rendering
// ============================================================================

fn render(alphabet: &RadixAlphabet, mut digits: DigitBuffer, number: Number, spec: &FormatSpec) -> String {
    digits.pad_integer(spec.width);
    let mut output = String::new();

    // The sign follows the source value, even when rounding reached zero
    if number.is_negative() {
        output.push_str(alphabet.negative_sign());
    } else if spec.sign == SignDisplay::Always {
        output.push_str(alphabet.positive_sign());
    }

    let integer = digits.integer();
    for (i, &digit) in integer.iter().enumerate() {
        if spec.grouping && i > 0 && (integer.len() - i) % 3 == 0 {
            output.push_str(alphabet.group_separator());
        }
        output.push_str(alphabet.digit(digit));
    }

    if !digits.fraction().is_empty() {
        output.push_str(alphabet.separator());
        for &digit in digits.fraction() {
            output.push_str(alphabet.digit(digit));
        }
    } else if spec.keep_point && spec.scale == Scale::Auto && !number.is_integer() {
        output.push_str(alphabet.separator());
        output.push_str(alphabet.zero());
    }

    output
}
