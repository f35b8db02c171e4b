// ============================================================================
// Radix Transcoding Library
// Numbers to and from positional notation in arbitrary symbol alphabets
// ============================================================================

//! # num-radix
//!
//! Converts integers, floats and decimals to positional notation in any
//! base, with digits drawn from a configurable symbol alphabet, and parses
//! such strings back.
//!
//! ## Features
//!
//! - **Arbitrary alphabets** with multi-character symbols and custom
//!   separator, sign, group and exponent markers
//! - **Presets** for binary, octal, hexadecimal, six dozenal notations,
//!   base 62 and the unambiguous base 57
//! - **Exact expansion** of fractions with round-half-up and full carry
//!   propagation
//! - **Shortest output** for floats that still round-trips
//! - **Scientific notation** with the exponent written in the same base
//! - **`Display` adapter** honouring `+`, precision, `#` and padding flags
//!
//! ## Example
//!
//! ```rust
//! use num_radix::prelude::*;
//!
//! let dozenal = RadixAlphabet::dozenal();
//!
//! // Integers and fractions
//! assert_eq!(dozenal.encode(13, &FormatSpec::default()).unwrap(), "11");
//! assert_eq!(dozenal.encode(1.0 / 3.0, &FormatSpec::default()).unwrap(), "0;4");
//!
//! // Fixed scale with carry, then scientific notation
//! let decimal = RadixAlphabet::by_base(10).unwrap();
//! assert_eq!(decimal.encode(0.9999, &FormatSpec::fixed(0)).unwrap(), "1");
//! let spec: FormatSpec = ".2e".parse().unwrap();
//! assert_eq!(decimal.encode(299_792_458, &spec).unwrap(), "3.00e+08");
//!
//! // Parsing back
//! assert_eq!(dozenal.decode("11").unwrap(), Number::Integer(13));
//!
//! // Display adapter
//! assert_eq!(format!("{:+}", dozenal.wrap(143)), "+EE");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Digit, FormatSpec, Notation, Preset, RadixAlphabet, RadixAlphabetBuilder, Scale,
        SignDisplay,
    };
    pub use crate::engine::{decode, decode_decimal, encode, RadixWrapper};
    pub use crate::numeric::{Number, RadixError, RadixResult};
}
