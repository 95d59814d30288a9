//! Unsigned 11-bit and 10-bit floats (R11G11B10F)
//!
//! Both formats share binary16's 5-bit exponent (bias 15) but drop the sign
//! bit and keep only 6 (f11) or 5 (f10) mantissa bits.
//!
//! Narrowing rules:
//! - round to nearest even
//! - negative values, -0.0 and -Inf encode to 0
//! - values too large for the format encode to +Inf
//! - NaN encodes to a quiet NaN pattern

use glam::Vec3;

const EXPONENT_BIAS: i32 = 15;
const EXPONENT_MAX: u32 = 0x1F;

const F11_MANTISSA_BITS: u32 = 6;
const F10_MANTISSA_BITS: u32 = 5;

/// Shift right by `shift` (1..=31) rounding to nearest, ties to even
#[inline]
fn shift_round_even(value: u32, shift: u32) -> u32 {
    let half = 1u32 << (shift - 1);
    let remainder = value & ((half << 1) - 1);
    let truncated = value >> shift;
    if remainder > half || (remainder == half && truncated & 1 == 1) {
        truncated + 1
    } else {
        truncated
    }
}

fn narrow_unsigned(value: f32, mantissa_bits: u32) -> u32 {
    let infinity = EXPONENT_MAX << mantissa_bits;

    if value.is_nan() {
        return infinity | (1 << (mantissa_bits - 1));
    }
    if value <= 0.0 {
        return 0;
    }
    if value.is_infinite() {
        return infinity;
    }

    let bits = value.to_bits();
    let exponent = ((bits >> 23) & 0xFF) as i32 - 127 + EXPONENT_BIAS;
    let mantissa = bits & 0x007F_FFFF;
    let drop = 23 - mantissa_bits;

    let encoded = if exponent > 0 {
        if exponent >= EXPONENT_MAX as i32 {
            return infinity;
        }
        // Rounding may carry into the exponent, which is still the right encoding
        shift_round_even(((exponent as u32) << 23) | mantissa, drop)
    } else {
        // Subnormal in the target format: restore the implicit bit and shift further
        let shift = drop + (1 - exponent) as u32;
        if shift > 31 {
            return 0;
        }
        shift_round_even(mantissa | 0x0080_0000, shift)
    };

    encoded.min(infinity)
}

fn widen_unsigned(bits: u32, mantissa_bits: u32) -> f32 {
    let exponent = bits >> mantissa_bits;
    let mantissa = bits & ((1 << mantissa_bits) - 1);

    match exponent {
        0 => mantissa as f32 * 2.0f32.powi(1 - EXPONENT_BIAS - mantissa_bits as i32),
        EXPONENT_MAX if mantissa == 0 => f32::INFINITY,
        EXPONENT_MAX => f32::NAN,
        _ => {
            let exponent = exponent as i32 - EXPONENT_BIAS + 127;
            f32::from_bits(((exponent as u32) << 23) | (mantissa << (23 - mantissa_bits)))
        }
    }
}

/// Narrow an f32 to an unsigned 11-bit float (low 11 bits of the result)
#[inline]
pub fn f32_to_f11_bits(value: f32) -> u32 {
    narrow_unsigned(value, F11_MANTISSA_BITS)
}

/// Widen the low 11 bits of `bits` from an unsigned 11-bit float
#[inline]
pub fn f11_bits_to_f32(bits: u32) -> f32 {
    widen_unsigned(bits & 0x7FF, F11_MANTISSA_BITS)
}

/// Narrow an f32 to an unsigned 10-bit float (low 10 bits of the result)
#[inline]
pub fn f32_to_f10_bits(value: f32) -> u32 {
    narrow_unsigned(value, F10_MANTISSA_BITS)
}

/// Widen the low 10 bits of `bits` from an unsigned 10-bit float
#[inline]
pub fn f10_bits_to_f32(bits: u32) -> f32 {
    widen_unsigned(bits & 0x3FF, F10_MANTISSA_BITS)
}

/// Pack x and y as 11-bit floats and z as a 10-bit float
///
/// x occupies bits 0-10, y bits 11-21, z bits 22-31.
#[inline]
pub fn pack_f2x11_1x10(v: Vec3) -> u32 {
    f32_to_f11_bits(v.x) | (f32_to_f11_bits(v.y) << 11) | (f32_to_f10_bits(v.z) << 22)
}

/// Inverse of [`pack_f2x11_1x10`]
#[inline]
pub fn unpack_f2x11_1x10(p: u32) -> Vec3 {
    Vec3::new(
        f11_bits_to_f32(p),
        f11_bits_to_f32(p >> 11),
        f10_bits_to_f32(p >> 22),
    )
}
