//! Normalized fixed-point codec (unorm / snorm)
//!
//! - unorm: `[0.0, 1.0]` ↔ `[0, 2^bits - 1]`
//! - snorm: `[-1.0, 1.0]` ↔ `[-(2^(bits-1) - 1), 2^(bits-1) - 1]`
//!
//! The destination width is picked by the integer type parameter, so each
//! width is its own monomorphized function with no runtime dispatch:
//!
//! ```
//! use nether_pack::norm::{pack_unorm, unpack_snorm};
//!
//! let bytes: [u8; 4] = pack_unorm([0.0f32, 0.5, 1.0, 2.0]);
//! assert_eq!(bytes, [0, 128, 255, 255]);
//!
//! let floats: [f32; 2] = unpack_snorm([i16::MIN, i16::MAX]);
//! assert_eq!(floats, [-1.0, 1.0]);
//! ```
//!
//! Packing clamps before scaling and rounds half away from zero. Unpacking
//! is the exact inverse of the scale step only, so a round trip is the
//! identity for values already on the grid.

/// Unsigned integer type usable as a unorm lane for float type `F`
pub trait Unorm<F>: Copy {
    /// Clamp to `[0, 1]`, scale by the type's maximum and round
    fn to_unorm(value: F) -> Self;
    /// Divide by the type's maximum
    fn from_unorm(self) -> F;
}

/// Signed integer type usable as a snorm lane for float type `F`
pub trait Snorm<F>: Copy {
    /// Clamp to `[-1, 1]`, scale by the type's maximum and round
    fn to_snorm(value: F) -> Self;
    /// Divide by the type's maximum, re-clamped to `[-1, 1]`
    fn from_snorm(self) -> F;
}

macro_rules! impl_unorm {
    ($($int:ty => $float:ty),* $(,)?) => {$(
        impl Unorm<$float> for $int {
            #[inline]
            fn to_unorm(value: $float) -> Self {
                (value.clamp(0.0, 1.0) * <$int>::MAX as $float).round() as $int
            }

            #[inline]
            fn from_unorm(self) -> $float {
                self as $float / <$int>::MAX as $float
            }
        }
    )*};
}

macro_rules! impl_snorm {
    ($($int:ty => $float:ty),* $(,)?) => {$(
        impl Snorm<$float> for $int {
            #[inline]
            fn to_snorm(value: $float) -> Self {
                (value.clamp(-1.0, 1.0) * <$int>::MAX as $float).round() as $int
            }

            #[inline]
            fn from_snorm(self) -> $float {
                // MIN has no positive counterpart; keep it at -1.0
                (self as $float / <$int>::MAX as $float).max(-1.0)
            }
        }
    )*};
}

impl_unorm!(u8 => f32, u16 => f32, u32 => f32, u8 => f64, u16 => f64, u32 => f64);
impl_snorm!(i8 => f32, i16 => f32, i32 => f32, i8 => f64, i16 => f64, i32 => f64);

/// Convert each component of a normalized float vector to unorm integers
#[inline]
pub fn pack_unorm<U, F, const N: usize>(vector: [F; N]) -> [U; N]
where
    U: Unorm<F>,
{
    vector.map(U::to_unorm)
}

/// Convert a unorm integer vector back to normalized floats
#[inline]
pub fn unpack_unorm<F, U, const N: usize>(packed: [U; N]) -> [F; N]
where
    U: Unorm<F>,
{
    packed.map(U::from_unorm)
}

/// Convert each component of a signed normalized float vector to snorm integers
#[inline]
pub fn pack_snorm<I, F, const N: usize>(vector: [F; N]) -> [I; N]
where
    I: Snorm<F>,
{
    vector.map(I::to_snorm)
}

/// Convert a snorm integer vector back to signed normalized floats
#[inline]
pub fn unpack_snorm<F, I, const N: usize>(packed: [I; N]) -> [F; N]
where
    I: Snorm<F>,
{
    packed.map(I::from_snorm)
}

// ============================================================================
// Arbitrary-Width Scalars (bit fields narrower than a byte-aligned type)
// ============================================================================

const UNORM_BITS: std::ops::RangeInclusive<u32> = 1..=24;
const SNORM_BITS: std::ops::RangeInclusive<u32> = 2..=24;

// Widths outside the supported range saturate to its nearest end
#[inline]
fn unorm_width(bits: u32) -> u32 {
    bits.clamp(*UNORM_BITS.start(), *UNORM_BITS.end())
}

#[inline]
fn snorm_width(bits: u32) -> u32 {
    bits.clamp(*SNORM_BITS.start(), *SNORM_BITS.end())
}

#[inline]
fn unorm_max(bits: u32) -> f32 {
    ((1u32 << unorm_width(bits)) - 1) as f32
}

#[inline]
fn snorm_max(bits: u32) -> f32 {
    ((1u32 << (snorm_width(bits) - 1)) - 1) as f32
}

/// Encode `value` as a `bits`-wide unorm field
///
/// `bits` is saturated to 1..=24, the widths whose codes f32 represents exactly.
#[inline]
pub fn pack_unorm_bits(value: f32, bits: u32) -> u32 {
    (value.clamp(0.0, 1.0) * unorm_max(bits)).round() as u32
}

/// Decode a `bits`-wide unorm field (saturated to 1..=24 bits); bits above the field are ignored
#[inline]
pub fn unpack_unorm_bits(packed: u32, bits: u32) -> f32 {
    let mask = (1u32 << unorm_width(bits)) - 1;
    (packed & mask) as f32 / unorm_max(bits)
}

/// Encode `value` as a `bits`-wide snorm value (saturated to 2..=24 bits)
///
/// The result is sign-extended to i32; mask it to place it in a field.
#[inline]
pub fn pack_snorm_bits(value: f32, bits: u32) -> i32 {
    (value.clamp(-1.0, 1.0) * snorm_max(bits)).round() as i32
}

/// Decode a sign-extended `bits`-wide snorm value (saturated to 2..=24 bits)
#[inline]
pub fn unpack_snorm_bits(packed: i32, bits: u32) -> f32 {
    (packed as f32 / snorm_max(bits)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unorm8_grid_roundtrip_exhaustive() {
        for k in 0..=u8::MAX {
            let decoded: [f32; 1] = unpack_unorm([k]);
            let encoded: [u8; 1] = pack_unorm(decoded);
            assert_eq!(encoded[0], k);
        }
    }

    #[test]
    fn test_unorm16_grid_roundtrip_exhaustive() {
        for k in 0..=u16::MAX {
            let decoded: [f32; 1] = unpack_unorm([k]);
            let encoded: [u16; 1] = pack_unorm(decoded);
            assert_eq!(encoded[0], k);
        }
    }

    #[test]
    fn test_unorm32_grid_roundtrip_sampled_f64() {
        let samples = (0..=4096u64)
            .map(|i| (i * 1_048_573) as u32)
            .chain([0, 1, 2, u32::MAX - 1, u32::MAX]);

        for k in samples {
            let decoded: [f64; 1] = unpack_unorm([k]);
            let encoded: [u32; 1] = pack_unorm(decoded);
            assert_eq!(encoded[0], k);
        }
    }

    #[test]
    fn test_unorm_error_bound() {
        for i in 0..=10_000 {
            let x = i as f32 / 10_000.0;

            let v8: [u8; 1] = pack_unorm([x]);
            let back8: [f32; 1] = unpack_unorm(v8);
            assert!((back8[0] - x).abs() <= 1.0 / 255.0, "x = {x}");

            let v16: [u16; 1] = pack_unorm([x]);
            let back16: [f32; 1] = unpack_unorm(v16);
            assert!((back16[0] - x).abs() <= 1.0 / 65535.0 + f32::EPSILON, "x = {x}");
        }
    }

    #[test]
    fn test_unorm_clamps_out_of_range() {
        let packed: [u8; 4] = pack_unorm([-3.0f32, -0.0, 1.5, f32::INFINITY]);
        assert_eq!(packed, [0, 0, 255, 255]);
    }

    #[test]
    fn test_unorm_rounds_to_nearest() {
        // 0.5 * 255 = 127.5 rounds away from zero
        let packed: [u8; 2] = pack_unorm([0.5f32, 0.498]);
        assert_eq!(packed, [128, 127]);
    }

    #[test]
    fn test_snorm8_roundtrip_exhaustive() {
        for i in (i8::MIN + 1)..=i8::MAX {
            let decoded: [f32; 1] = unpack_snorm([i]);
            let encoded: [i8; 1] = pack_snorm(decoded);
            assert_eq!(encoded[0], i);
        }
    }

    #[test]
    fn test_snorm16_roundtrip_exhaustive() {
        for i in (i16::MIN + 1)..=i16::MAX {
            let decoded: [f32; 1] = unpack_snorm([i]);
            let encoded: [i16; 1] = pack_snorm(decoded);
            assert_eq!(encoded[0], i);
        }
    }

    #[test]
    fn test_snorm32_roundtrip_sampled_f64() {
        for i in [i32::MIN + 1, -1_000_000_007, -1, 0, 1, 123_456_789, i32::MAX] {
            let decoded: [f64; 1] = unpack_snorm([i]);
            let encoded: [i32; 1] = pack_snorm(decoded);
            assert_eq!(encoded[0], i);
        }
    }

    #[test]
    fn test_snorm_most_negative_decodes_to_minus_one() {
        let decoded: [f32; 3] = unpack_snorm([i8::MIN, i8::MIN + 1, i8::MAX]);
        assert_eq!(decoded, [-1.0, -1.0, 1.0]);

        let decoded: [f32; 1] = unpack_snorm([i16::MIN]);
        assert_eq!(decoded, [-1.0]);
    }

    #[test]
    fn test_snorm_clamps_out_of_range() {
        let packed: [i16; 4] = pack_snorm([-2.0f32, -1.0, 1.0, 7.0]);
        assert_eq!(packed, [-32767, -32767, 32767, 32767]);
    }

    #[test]
    fn test_nan_encodes_to_zero() {
        let u: [u8; 1] = pack_unorm([f32::NAN]);
        let s: [i8; 1] = pack_snorm([f32::NAN]);
        assert_eq!(u, [0]);
        assert_eq!(s, [0]);
    }

    #[test]
    fn test_componentwise_order_preserved() {
        let packed: [u16; 4] = pack_unorm([1.0f32, 0.0, 0.25, 0.75]);
        assert_eq!(packed, [65535, 0, 16384, 49151]);
    }

    #[test]
    fn test_bits_helpers_match_typed_codecs() {
        for k in 0..=u8::MAX {
            let x = unpack_unorm_bits(k as u32, 8);
            assert_eq!(pack_unorm_bits(x, 8), k as u32);
            let typed: [f32; 1] = unpack_unorm([k]);
            assert_eq!(x, typed[0]);
        }

        for i in -127..=127i32 {
            let x = unpack_snorm_bits(i, 8);
            assert_eq!(pack_snorm_bits(x, 8), i);
        }
    }

    #[test]
    fn test_ten_and_two_bit_fields() {
        assert_eq!(pack_unorm_bits(1.0, 10), 1023);
        assert_eq!(pack_unorm_bits(1.0, 2), 3);
        assert_eq!(pack_unorm_bits(0.5, 2), 2);
        assert_eq!(unpack_unorm_bits(0xFFFF_FC00 | 1023, 10), 1.0);

        assert_eq!(pack_snorm_bits(-1.0, 10), -511);
        assert_eq!(pack_snorm_bits(1.0, 2), 1);
        assert_eq!(pack_snorm_bits(-1.0, 2), -1);
        assert_eq!(unpack_snorm_bits(-512, 10), -1.0);
        assert_eq!(unpack_snorm_bits(-2, 2), -1.0);
    }

    #[test]
    fn test_bit_widths_saturate() {
        assert_eq!(pack_unorm_bits(1.0, 32), 0x00FF_FFFF);
        assert_eq!(pack_unorm_bits(1.0, 0), 1);
        assert_eq!(unpack_unorm_bits(u32::MAX, 32), 1.0);
        assert_eq!(unpack_unorm_bits(1, 0), 1.0);

        assert_eq!(pack_snorm_bits(-1.0, 64), -8_388_607);
        assert_eq!(pack_snorm_bits(1.0, 0), 1);
        assert_eq!(unpack_snorm_bits(1, 1), 1.0);
        assert_eq!(unpack_snorm_bits(-8_388_607, 32), -1.0);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let input = [0.1f32, 0.2, 0.3, 0.4];
        let a: [u8; 4] = pack_unorm(input);
        let b: [u8; 4] = pack_unorm(input);
        assert_eq!(a, b);
    }
}
