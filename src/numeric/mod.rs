// ============================================================================
// Numeric Module
// Value domain and error types shared by the alphabet and the transcoder
// ============================================================================
//
// This module provides:
// - Number: integer, float or exact decimal input/output value
// - RadixError: Error types for alphabet construction and transcoding
//
// Design principles:
// - Native widths only (i128, f64, rust_decimal::Decimal)
// - All fallible operations return Result (no panics)

mod errors;
mod number;

pub use errors::{RadixError, RadixResult};
pub use number::Number;
