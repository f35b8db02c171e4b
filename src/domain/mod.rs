// ============================================================================
// Domain Models Module
// Alphabets, presets and format specifications
// ============================================================================

pub mod alphabet;
pub mod format;
pub mod preset;

pub use alphabet::{Digit, RadixAlphabet, RadixAlphabetBuilder};
pub use format::{FormatSpec, Notation, Scale, SignDisplay};
pub use preset::Preset;
