//! Half-float vector codec
//!
//! Converts each f32 lane to its own binary16 bit pattern and back. Unlike
//! [`crate::lanes`], nothing is concatenated here: a `[f32; N]` becomes a
//! `[u16; N]`. Use [`crate::glsl::pack_half_2x16`] for the GLSL form that
//! folds two halves into one u32.

use bytemuck::{cast_slice, cast_slice_mut};
use glam::{Vec2, Vec4};
use half::f16;
use half::slice::HalfFloatSliceExt;

use crate::bits::{float_to_half_bits, half_bits_to_float};

/// Convert each component to a binary16 bit pattern (round to nearest even)
#[inline]
pub fn pack_half<const N: usize>(vector: [f32; N]) -> [u16; N] {
    vector.map(float_to_half_bits)
}

/// Widen each binary16 bit pattern to f32
#[inline]
pub fn unpack_half<const N: usize>(packed: [u16; N]) -> [f32; N] {
    packed.map(half_bits_to_float)
}

/// [`pack_half`] for a glam `Vec2`
#[inline]
pub fn pack_half_vec2(v: Vec2) -> [u16; 2] {
    pack_half(v.to_array())
}

/// [`unpack_half`] into a glam `Vec2`
#[inline]
pub fn unpack_half_vec2(packed: [u16; 2]) -> Vec2 {
    Vec2::from_array(unpack_half(packed))
}

/// [`pack_half`] for a glam `Vec4`
#[inline]
pub fn pack_half_vec4(v: Vec4) -> [u16; 4] {
    pack_half(v.to_array())
}

/// [`unpack_half`] into a glam `Vec4`
#[inline]
pub fn unpack_half_vec4(packed: [u16; 4]) -> Vec4 {
    Vec4::from_array(unpack_half(packed))
}

/// Bulk f32 → binary16 conversion
///
/// Converts `min(src.len(), dst.len())` values; the rest of `dst` is untouched.
pub fn pack_half_slice(src: &[f32], dst: &mut [u16]) {
    let len = src.len().min(dst.len());
    let halves: &mut [f16] = cast_slice_mut(&mut dst[..len]);
    halves.convert_from_f32_slice(&src[..len]);
}

/// Bulk binary16 → f32 conversion
///
/// Converts `min(src.len(), dst.len())` values; the rest of `dst` is untouched.
pub fn unpack_half_slice(src: &[u16], dst: &mut [f32]) {
    let len = src.len().min(dst.len());
    let halves: &[f16] = cast_slice(&src[..len]);
    halves.convert_to_f32_slice(&mut dst[..len]);
}
