// ============================================================================
// Engine Module
// Stateless encode/decode algorithms parameterised by an alphabet
// ============================================================================

mod decoder;
mod digits;
mod encoder;
mod fraction;
mod wrapper;

pub use decoder::{decode, decode_decimal};
pub use encoder::{encode, EXPONENT_WIDTH, MAX_AUTO_FRACTION_DIGITS};
pub use wrapper::RadixWrapper;

use crate::domain::{FormatSpec, RadixAlphabet};
use crate::numeric::{Number, RadixResult};
use rust_decimal::Decimal;

impl RadixAlphabet {
    /// Encode `number` in this alphabet.
    ///
    /// # Example
    /// ```
    /// use num_radix::prelude::*;
    ///
    /// let bin = RadixAlphabet::bin();
    /// assert_eq!(bin.encode(10, &FormatSpec::default()).unwrap(), "1010");
    /// assert_eq!(bin.encode(2.75, &FormatSpec::default()).unwrap(), "10.11");
    /// ```
    pub fn encode(&self, number: impl Into<Number>, spec: &FormatSpec) -> RadixResult<String> {
        encode(self, number.into(), spec)
    }

    /// Decode `text` written in this alphabet.
    pub fn decode(&self, text: &str) -> RadixResult<Number> {
        decode(self, text)
    }

    /// Decode `text` into an exact decimal.
    pub fn decode_decimal(&self, text: &str) -> RadixResult<Decimal> {
        decode_decimal(self, text)
    }
}
