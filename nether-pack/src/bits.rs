//! IEEE 754 bit reinterpretation
//!
//! Every conversion here is a reinterpretation of storage, not a numeric
//! cast: `float_to_bits` and `bits_to_float` are exact inverses for all
//! 2^32 patterns, NaN payloads included.
//!
//! The binary16 conversions go through [`half::f16`]:
//! - widening (`half_bits_to_float`) is exact, subnormals included
//! - narrowing (`float_to_half_bits`) rounds to nearest even, overflows to
//!   ±Inf and underflows to subnormals or a signed zero

use half::f16;

/// Sign bit of a binary16 pattern
pub const HALF_SIGN_MASK: u16 = 0x8000;
/// Exponent field of a binary16 pattern
pub const HALF_EXPONENT_MASK: u16 = 0x7C00;
/// Mantissa field of a binary16 pattern
pub const HALF_MANTISSA_MASK: u16 = 0x03FF;

/// Reinterpret an f32 as its raw bit pattern
#[inline]
pub const fn float_to_bits(value: f32) -> u32 {
    value.to_bits()
}

/// Reinterpret a raw bit pattern as an f32
#[inline]
pub const fn bits_to_float(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Reinterpret an f64 as its raw bit pattern
#[inline]
pub const fn double_to_bits(value: f64) -> u64 {
    value.to_bits()
}

/// Reinterpret a raw bit pattern as an f64
#[inline]
pub const fn bits_to_double(bits: u64) -> f64 {
    f64::from_bits(bits)
}

/// Widen a binary16 bit pattern to f32
#[inline]
pub fn half_bits_to_float(bits: u16) -> f32 {
    f16::from_bits(bits).to_f32()
}

/// Narrow an f32 to a binary16 bit pattern (round to nearest even)
#[inline]
pub fn float_to_half_bits(value: f32) -> u16 {
    f16::from_f32(value).to_bits()
}

/// True when the binary16 pattern is NaN (all-ones exponent, non-zero mantissa)
#[inline]
pub const fn is_half_nan(bits: u16) -> bool {
    bits & HALF_EXPONENT_MASK == HALF_EXPONENT_MASK && bits & HALF_MANTISSA_MASK != 0
}
