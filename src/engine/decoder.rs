// ============================================================================
// Decoder
// Digit string -> Number, the inverse of the encoder
// ============================================================================

use super::encoder::positional_base;
use crate::domain::{Digit, RadixAlphabet};
use crate::numeric::{Number, RadixError, RadixResult};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Beyond this binary magnitude a value cannot be a finite double
const MAX_BINARY_MAGNITUDE: f64 = 1025.0;

/// Below this binary magnitude a value rounds to zero
const MIN_BINARY_MAGNITUDE: f64 = -1076.0;

/// Decode `text` written in `alphabet`.
///
/// Accepted grammar, with every symbol taken from the alphabet:
///
/// ```text
/// [sign] digit+ [group digit+]* [separator digit+] [exponent [sign] digit+]
/// ```
///
/// A plain integer decodes to `Number::Integer`, or to `Number::Float`
/// when it does not fit `i128`; anything with a fraction or an exponent
/// decodes to `Number::Float`.
///
/// # Errors
/// - `InvalidDigit` with the character position of the first symbol that
///   does not fit the grammar
/// - `Overflow` when the value exceeds `f64`
pub fn decode(alphabet: &RadixAlphabet, text: &str) -> RadixResult<Number> {
    let base = positional_base(alphabet)?;
    let numeral = Numeral::parse(alphabet, text)?;

    let number = if numeral.fraction.is_empty() && numeral.exponent.is_none() {
        match accumulate_i128(&numeral.integer, base, numeral.negative) {
            Ok(value) => Number::Integer(value),
            // Wide floats are encoded as plain digit runs
            Err(RadixError::Overflow) => Number::Float(numeral.to_f64(base)?),
            Err(e) => return Err(e),
        }
    } else {
        Number::Float(numeral.to_f64(base)?)
    };

    tracing::trace!(base, text, ?number, "decoded");
    Ok(number)
}

/// Decode `text` into an exact `Decimal`.
///
/// Terminating expansions that fit 28 significant decimal digits are exact;
/// longer fractions are rounded to `Decimal` precision.
pub fn decode_decimal(alphabet: &RadixAlphabet, text: &str) -> RadixResult<Decimal> {
    let base = positional_base(alphabet)?;
    let numeral = Numeral::parse(alphabet, text)?;
    let radix = Decimal::from(base);

    let mut value = Decimal::ZERO;
    for &digit in &numeral.integer {
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(Decimal::from(digit)))
            .ok_or(RadixError::Overflow)?;
    }

    // Horner from the least significant fractional digit keeps every step small
    let mut fraction = Decimal::ZERO;
    for &digit in numeral.fraction.iter().rev() {
        fraction = (fraction + Decimal::from(digit))
            .checked_div(radix)
            .ok_or(RadixError::Overflow)?;
    }
    value = value.checked_add(fraction).ok_or(RadixError::Overflow)?;

    let exponent = numeral.exponent.unwrap_or(0);
    for _ in 0..exponent.unsigned_abs() {
        // Division reaches zero and multiplication overflows within a hundred steps
        if value.is_zero() {
            break;
        }
        value = if exponent > 0 {
            value.checked_mul(radix)
        } else {
            value.checked_div(radix)
        }
        .ok_or(RadixError::Overflow)?;
    }

    if numeral.negative {
        value.set_sign_negative(true);
    }

    tracing::trace!(base, text, %value, "decoded decimal");
    Ok(value)
}

// ============================================================================
// Tokens
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Digit(Digit),
    Separator,
    Group,
    Exponent,
    Negative,
    Positive,
}

#[derive(Debug, Clone, Copy)]
struct Scanned<'t> {
    token: Token,
    text: &'t str,
    position: usize,
}

impl Scanned<'_> {
    fn unexpected(&self) -> RadixError {
        RadixError::InvalidDigit {
            symbol: self.text.to_string(),
            position: self.position,
        }
    }
}

/// Match one symbol at the start of `text`. No symbol of a valid alphabet is
/// a prefix of another, so the first hit is the only one.
fn match_symbol(alphabet: &RadixAlphabet, text: &str) -> Option<(Token, usize)> {
    if let Some((digit, len)) = alphabet.lookup_digit(text) {
        return Some((Token::Digit(digit), len));
    }
    [
        (alphabet.separator(), Token::Separator),
        (alphabet.group_separator(), Token::Group),
        (alphabet.exponent_marker(), Token::Exponent),
        (alphabet.negative_sign(), Token::Negative),
        (alphabet.positive_sign(), Token::Positive),
    ]
    .into_iter()
    .find(|(symbol, _)| text.starts_with(symbol))
    .map(|(symbol, token)| (token, symbol.len()))
}

fn tokenize<'t>(alphabet: &RadixAlphabet, body: &'t str) -> RadixResult<Vec<Scanned<'t>>> {
    let mut tokens = Vec::new();
    let mut rest = body;
    let mut position = 0;

    while let Some(first) = rest.chars().next() {
        let (token, len) = match_symbol(alphabet, rest).ok_or_else(|| RadixError::InvalidDigit {
            symbol: first.to_string(),
            position,
        })?;
        let (text, tail) = rest.split_at(len);
        tokens.push(Scanned {
            token,
            text,
            position,
        });
        position += text.chars().count();
        rest = tail;
    }

    Ok(tokens)
}

// ============================================================================
// Numeral
// ============================================================================

/// Parsed but not yet evaluated number.
#[derive(Debug, Default, PartialEq)]
struct Numeral {
    negative: bool,
    integer: Vec<Digit>,
    fraction: Vec<Digit>,
    exponent: Option<i64>,
}

struct Cursor<'t> {
    tokens: Vec<Scanned<'t>>,
    index: usize,
    end: usize,
}

impl<'t> Cursor<'t> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.index).map(|scanned| scanned.token)
    }

    fn eat(&mut self, token: Token) -> bool {
        let hit = self.peek() == Some(token);
        if hit {
            self.index += 1;
        }
        hit
    }

    /// Optional leading sign; true when negative.
    fn sign(&mut self) -> bool {
        if self.eat(Token::Negative) {
            return true;
        }
        self.eat(Token::Positive);
        false
    }

    /// One or more digits. When `groups` is set, a group separator is skipped
    /// if it sits between two digits.
    fn digits(&mut self, groups: bool) -> RadixResult<Vec<Digit>> {
        let mut digits = Vec::new();
        loop {
            match self.peek() {
                Some(Token::Digit(digit)) => digits.push(digit),
                Some(Token::Group) if groups && !digits.is_empty() && self.digit_follows() => {},
                _ => break,
            }
            self.index += 1;
        }
        if digits.is_empty() {
            return Err(self.unexpected());
        }
        Ok(digits)
    }

    fn digit_follows(&self) -> bool {
        matches!(
            self.tokens.get(self.index + 1).map(|t| t.token),
            Some(Token::Digit(_))
        )
    }

    /// Error for the current token, or for a missing symbol at the end.
    fn unexpected(&self) -> RadixError {
        self.tokens
            .get(self.index)
            .map(Scanned::unexpected)
            .unwrap_or(RadixError::InvalidDigit {
                symbol: String::new(),
                position: self.end,
            })
    }
}

impl Numeral {
    fn parse(alphabet: &RadixAlphabet, text: &str) -> RadixResult<Self> {
        let body = text.trim();
        let mut cursor = Cursor {
            tokens: tokenize(alphabet, body)?,
            index: 0,
            end: body.chars().count(),
        };
        let mut numeral = Numeral {
            negative: cursor.sign(),
            integer: cursor.digits(true)?,
            ..Numeral::default()
        };

        if cursor.eat(Token::Separator) {
            numeral.fraction = cursor.digits(false)?;
        }

        if cursor.eat(Token::Exponent) {
            let negative = cursor.sign();
            let digits = cursor.digits(false)?;
            let base = alphabet.base() as u32;
            let exponent = accumulate_i128(&digits, base, negative)?;
            numeral.exponent = Some(i64::try_from(exponent).map_err(|_| RadixError::Overflow)?);
        }

        if cursor.peek().is_some() {
            return Err(cursor.unexpected());
        }
        Ok(numeral)
    }

    /// Evaluate as the double nearest to the exact value.
    fn to_f64(&self, base: u32) -> RadixResult<f64> {
        let mantissa = self
            .integer
            .iter()
            .chain(&self.fraction)
            .fold(BigUint::zero(), |acc, &digit| acc * base + digit);
        let fraction_len = i64::try_from(self.fraction.len()).map_err(|_| RadixError::Overflow)?;
        let Some(power) = self.exponent.unwrap_or(0).checked_sub(fraction_len) else {
            return Ok(if self.negative { -0.0 } else { 0.0 });
        };

        let magnitude = nearest_f64(mantissa, base, power)?;
        Ok(if self.negative { -magnitude } else { magnitude })
    }
}

/// Round `mantissa * base^power` to the nearest double, ties to even.
fn nearest_f64(mantissa: BigUint, base: u32, power: i64) -> RadixResult<f64> {
    if mantissa.is_zero() {
        return Ok(0.0);
    }

    // mantissa lies in [2^(bits-1), 2^bits)
    let magnitude = mantissa.bits() as f64 + power as f64 * (base as f64).log2();
    if magnitude - 1.0 > MAX_BINARY_MAGNITUDE {
        return Err(RadixError::Overflow);
    }
    if magnitude < MIN_BINARY_MAGNITUDE {
        return Ok(0.0);
    }

    let scale = u32::try_from(power.unsigned_abs()).map_err(|_| RadixError::Overflow)?;
    let factor = BigUint::from(base).pow(scale);
    let (numerator, denominator) = if power >= 0 {
        (mantissa * factor, BigUint::one())
    } else {
        (mantissa, factor)
    };

    // Binary exponent x with 2^x <= numerator / denominator < 2^(x+1)
    let mut exponent = numerator.bits() as i64 - denominator.bits() as i64;
    if compare_scaled(&numerator, &denominator, exponent) == Ordering::Less {
        exponent -= 1;
    }

    // Weight of the last mantissa bit, clamped to the subnormal range
    let lsb = (exponent - 52).max(-1074);
    let (quotient, remainder, divisor) = if lsb < 0 {
        let scaled = numerator << lsb.unsigned_abs() as usize;
        (&scaled / &denominator, &scaled % &denominator, denominator)
    } else {
        let divisor = denominator << lsb as usize;
        (&numerator / &divisor, &numerator % &divisor, divisor)
    };

    let mut bits = quotient.to_u64().ok_or(RadixError::Overflow)?;
    let twice = remainder << 1usize;
    if twice > divisor || (twice == divisor && bits & 1 == 1) {
        bits += 1;
    }

    let value = bits as f64 * power_of_two(lsb);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RadixError::Overflow)
    }
}

/// Compare `numerator` with `denominator * 2^exponent`.
fn compare_scaled(numerator: &BigUint, denominator: &BigUint, exponent: i64) -> Ordering {
    if exponent >= 0 {
        numerator.cmp(&(denominator << exponent as usize))
    } else {
        (numerator << exponent.unsigned_abs() as usize).cmp(denominator)
    }
}

/// Exact `2^exponent` for exponents in the double range.
fn power_of_two(exponent: i64) -> f64 {
    if exponent >= -1022 {
        f64::from_bits(((exponent + 1023) as u64) << 52)
    } else {
        f64::from_bits(1u64 << (exponent + 1074))
    }
}

/// Horner accumulation in checked i128, negated on the fly so that
/// `i128::MIN` is reachable.
fn accumulate_i128(digits: &[Digit], base: u32, negative: bool) -> RadixResult<i128> {
    digits.iter().try_fold(0i128, |acc, &digit| {
        let shifted = acc.checked_mul(base as i128).ok_or(RadixError::Overflow)?;
        let step = if negative {
            shifted.checked_sub(digit as i128)
        } else {
            shifted.checked_add(digit as i128)
        };
        step.ok_or(RadixError::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RadixAlphabetBuilder;

    fn decimal() -> RadixAlphabet {
        RadixAlphabet::by_base(10).unwrap()
    }

    #[test]
    fn test_decode_integers() {
        assert_eq!(decode(&RadixAlphabet::bin(), "1010").unwrap(), Number::Integer(10));
        assert_eq!(decode(&RadixAlphabet::dozenal(), "11").unwrap(), Number::Integer(13));
        assert_eq!(decode(&RadixAlphabet::hex(), "-FF").unwrap(), Number::Integer(-255));
        assert_eq!(decode(&decimal(), "+42").unwrap(), Number::Integer(42));
        assert_eq!(decode(&decimal(), "  7 \n").unwrap(), Number::Integer(7));
    }

    #[test]
    fn test_decode_integer_extremes() {
        let hex = RadixAlphabet::hex();
        let min = format!("-8{}", "0".repeat(31));
        assert_eq!(decode(&hex, &min).unwrap(), Number::Integer(i128::MIN));

        let past_i128 = format!("8{}", "0".repeat(31));
        assert_eq!(decode(&hex, &past_i128).unwrap(), Number::Float(2f64.powi(127)));
    }

    #[test]
    fn test_decode_integer_run_beyond_i128() {
        use crate::domain::FormatSpec;
        use crate::engine::encode;

        let alphabet = decimal();
        let text = encode(&alphabet, Number::Float(1e39), &FormatSpec::fixed(0)).unwrap();
        assert!(!text.contains('.'));
        assert_eq!(decode(&alphabet, &text).unwrap(), Number::Float(1e39));

        for value in [f64::MAX, -f64::MAX] {
            for alphabet in [decimal(), RadixAlphabet::hex(), RadixAlphabet::dozenal()] {
                let text = encode(&alphabet, Number::Float(value), &FormatSpec::default()).unwrap();
                assert_eq!(decode(&alphabet, &text).unwrap(), Number::Float(value));
            }
        }

        let past_f64 = format!("1{}", "0".repeat(400));
        assert_eq!(decode(&alphabet, &past_f64), Err(RadixError::Overflow));
    }

    #[test]
    fn test_decode_group_separators() {
        assert_eq!(decode(&decimal(), "1,000,000").unwrap(), Number::Integer(1_000_000));
        assert!(matches!(
            decode(&decimal(), ",100"),
            Err(RadixError::InvalidDigit { position: 0, .. })
        ));
        assert!(matches!(
            decode(&decimal(), "1,,000"),
            Err(RadixError::InvalidDigit { position: 1, .. })
        ));
        assert!(matches!(
            decode(&decimal(), "12,"),
            Err(RadixError::InvalidDigit { position: 2, .. })
        ));
        assert_eq!(
            decode(&decimal(), "1.2,5"),
            Err(RadixError::InvalidDigit {
                symbol: ",".to_string(),
                position: 3
            })
        );
    }

    #[test]
    fn test_decode_fractions() {
        assert_eq!(decode(&RadixAlphabet::bin(), "10.11").unwrap(), Number::Float(2.75));
        assert_eq!(decode(&RadixAlphabet::dozenal(), "0;6").unwrap(), Number::Float(0.5));
        assert_eq!(decode(&decimal(), "0.1").unwrap(), Number::Float(0.1));
        assert_eq!(decode(&decimal(), "-3.25").unwrap(), Number::Float(-3.25));
    }

    #[test]
    fn test_decode_scientific() {
        assert_eq!(decode(&decimal(), "1.5e+02").unwrap(), Number::Float(150.0));
        assert_eq!(decode(&decimal(), "5e-01").unwrap(), Number::Float(0.5));
        assert_eq!(decode(&RadixAlphabet::bin(), "1.1e-10").unwrap(), Number::Float(0.375));
        assert_eq!(decode(&RadixAlphabet::hex_lc(), "1^+03").unwrap(), Number::Float(4096.0));
    }

    #[test]
    fn test_decode_correctly_rounded() {
        assert_eq!(decode(&decimal(), "1.23").unwrap(), Number::Float(1.23));
        assert_eq!(decode(&decimal(), "3.14159").unwrap(), Number::Float(3.14159));
        assert_eq!(
            decode(&decimal(), "1.602176634e-19").unwrap(),
            Number::Float(1.602176634e-19)
        );
        assert_eq!(
            decode(&decimal(), "1.7976931348623157e+308").unwrap(),
            Number::Float(f64::MAX)
        );
        assert_eq!(
            decode(&decimal(), "4.9406564584124654e-324").unwrap(),
            Number::Float(f64::from_bits(1))
        );
        assert_eq!(decode(&decimal(), "1e-400").unwrap(), Number::Float(0.0));
    }

    #[test]
    fn test_nearest_ties_to_even() {
        // 2^53 + 1 sits halfway between two doubles
        let halfway = BigUint::from((1u64 << 53) + 1);
        assert_eq!(nearest_f64(halfway, 10, 0).unwrap(), 9007199254740992.0);
        let above = BigUint::from((1u64 << 53) + 3);
        assert_eq!(nearest_f64(above, 10, 0).unwrap(), 9007199254740996.0);
    }

    #[test]
    fn test_decode_float_overflow() {
        assert_eq!(decode(&decimal(), "1e+999"), Err(RadixError::Overflow));
        assert_eq!(decode(&decimal(), "0e+999").unwrap(), Number::Float(0.0));
    }

    #[test]
    fn test_decode_extreme_exponents() {
        let tiny = decode(&decimal(), "1.5e-9223372036854775808").unwrap();
        assert_eq!(tiny, Number::Float(0.0));

        let tiny = decode(&decimal(), "-1.5e-9223372036854775808").unwrap();
        assert!(matches!(tiny, Number::Float(v) if v == 0.0 && v.is_sign_negative()));

        assert_eq!(
            decode(&decimal(), "1.5e+9223372036854775807"),
            Err(RadixError::Overflow)
        );
    }

    #[test]
    fn test_invalid_digit_position() {
        assert_eq!(
            decode(&RadixAlphabet::hex(), "12G"),
            Err(RadixError::InvalidDigit {
                symbol: "G".to_string(),
                position: 2
            })
        );
        // Position counts characters, not bytes
        assert_eq!(
            decode(&RadixAlphabet::dozenal_pitman(), "↊↋Z"),
            Err(RadixError::InvalidDigit {
                symbol: "Z".to_string(),
                position: 2
            })
        );
    }

    #[test]
    fn test_second_separator_rejected() {
        assert_eq!(
            decode(&decimal(), "1.2.3"),
            Err(RadixError::InvalidDigit {
                symbol: ".".to_string(),
                position: 3
            })
        );
    }

    #[test]
    fn test_empty_and_incomplete_input() {
        let empty = RadixError::InvalidDigit {
            symbol: String::new(),
            position: 0,
        };
        assert_eq!(decode(&decimal(), "   "), Err(empty));
        assert!(matches!(
            decode(&decimal(), "-"),
            Err(RadixError::InvalidDigit { position: 1, .. })
        ));
        assert!(matches!(
            decode(&decimal(), "1."),
            Err(RadixError::InvalidDigit { position: 2, .. })
        ));
        assert!(matches!(
            decode(&decimal(), "1e"),
            Err(RadixError::InvalidDigit { position: 2, .. })
        ));
        assert!(matches!(
            decode(&decimal(), "1e+2.5"),
            Err(RadixError::InvalidDigit { position: 4, .. })
        ));
    }

    #[test]
    fn test_sign_only_at_start() {
        assert!(matches!(
            decode(&decimal(), "1-2"),
            Err(RadixError::InvalidDigit { position: 1, .. })
        ));
        assert!(matches!(
            decode(&decimal(), "+-2"),
            Err(RadixError::InvalidDigit { position: 1, .. })
        ));
    }

    #[test]
    fn test_multi_character_symbols() {
        let alphabet = RadixAlphabetBuilder::from_symbols(["zero", "one"])
            .separator(" point ")
            .negative_sign("minus ")
            .build()
            .unwrap();
        assert_eq!(
            decode(&alphabet, "minus onezero point one").unwrap(),
            Number::Float(-2.5)
        );
        assert_eq!(decode(&alphabet, "oneone").unwrap(), Number::Integer(3));
    }

    #[test]
    fn test_decode_decimal_exact() {
        assert_eq!(
            decode_decimal(&RadixAlphabet::bin(), "0.0001").unwrap(),
            Decimal::new(625, 4)
        );
        assert_eq!(
            decode_decimal(&RadixAlphabet::dozenal(), "-0;6").unwrap(),
            Decimal::new(-5, 1)
        );
        assert_eq!(
            decode_decimal(&decimal(), "1.5e+02").unwrap(),
            Decimal::from(150)
        );
        assert_eq!(
            decode_decimal(&decimal(), "25e-03").unwrap(),
            Decimal::new(25, 3)
        );
    }

    #[test]
    fn test_decode_decimal_huge_exponent() {
        assert_eq!(decode_decimal(&decimal(), "1e-99999999999").unwrap(), Decimal::ZERO);
        assert_eq!(decode_decimal(&decimal(), "0e+99999999999").unwrap(), Decimal::ZERO);
        assert_eq!(
            decode_decimal(&decimal(), "1e+99999999999"),
            Err(RadixError::Overflow)
        );
    }

    #[test]
    fn test_unary_alphabet_rejected() {
        let unary = RadixAlphabet::by_base(1).unwrap();
        assert!(matches!(decode(&unary, "0"), Err(RadixError::Range { .. })));
    }
}
