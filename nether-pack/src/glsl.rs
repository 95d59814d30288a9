//! GLSL built-in pack/unpack functions
//!
//! The fixed-shape functions from GLSL 4.20 section 8.4, composed from the
//! normalized, lane and half-float codecs:
//!
//! | GLSL | Rust |
//! |------|------|
//! | `packUnorm2x16` | [`pack_unorm_2x16`] |
//! | `packSnorm2x16` | [`pack_snorm_2x16`] |
//! | `packUnorm4x8` | [`pack_unorm_4x8`] |
//! | `packSnorm4x8` | [`pack_snorm_4x8`] |
//! | `packHalf2x16` | [`pack_half_2x16`] |
//! | `packDouble2x32` | [`pack_double_2x32`] |
//!
//! The first component always lands in the least significant bits.

use glam::{UVec2, Vec2, Vec4};

use crate::bits::{bits_to_double, double_to_bits};
use crate::float16::{pack_half_vec2, unpack_half_vec2};
use crate::lanes::{pack_uint_2x16, pack_uint_2x32, unpack_uint_2x16, unpack_uint_2x32};
use crate::lanes::{pack_uint_4x8, unpack_uint_4x8};
use crate::norm::{pack_snorm, pack_unorm, unpack_snorm, unpack_unorm};

/// Two 16-bit unorm values in one u32, x in the low half
#[inline]
pub fn pack_unorm_2x16(v: Vec2) -> u32 {
    pack_uint_2x16(pack_unorm(v.to_array()))
}

/// Inverse of [`pack_unorm_2x16`]
#[inline]
pub fn unpack_unorm_2x16(p: u32) -> Vec2 {
    Vec2::from_array(unpack_unorm(unpack_uint_2x16(p)))
}

/// Two 16-bit snorm values in one u32, x in the low half
#[inline]
pub fn pack_snorm_2x16(v: Vec2) -> u32 {
    let lanes: [i16; 2] = pack_snorm(v.to_array());
    pack_uint_2x16(lanes.map(|lane| lane as u16))
}

/// Inverse of [`pack_snorm_2x16`]; results are clamped to [-1, 1]
#[inline]
pub fn unpack_snorm_2x16(p: u32) -> Vec2 {
    let lanes = unpack_uint_2x16(p).map(|lane| lane as i16);
    Vec2::from_array(unpack_snorm(lanes))
}

/// Four 8-bit unorm values in one u32, x in the lowest byte
#[inline]
pub fn pack_unorm_4x8(v: Vec4) -> u32 {
    pack_uint_4x8(pack_unorm(v.to_array()))
}

/// Inverse of [`pack_unorm_4x8`]
#[inline]
pub fn unpack_unorm_4x8(p: u32) -> Vec4 {
    Vec4::from_array(unpack_unorm(unpack_uint_4x8(p)))
}

/// Four 8-bit snorm values in one u32, x in the lowest byte
#[inline]
pub fn pack_snorm_4x8(v: Vec4) -> u32 {
    let lanes: [i8; 4] = pack_snorm(v.to_array());
    pack_uint_4x8(lanes.map(|lane| lane as u8))
}

/// Inverse of [`pack_snorm_4x8`]; results are clamped to [-1, 1]
#[inline]
pub fn unpack_snorm_4x8(p: u32) -> Vec4 {
    let lanes = unpack_uint_4x8(p).map(|lane| lane as i8);
    Vec4::from_array(unpack_snorm(lanes))
}

/// Two binary16 values in one u32, x in the low half
#[inline]
pub fn pack_half_2x16(v: Vec2) -> u32 {
    pack_uint_2x16(pack_half_vec2(v))
}

/// Widen the low (x) and high (y) binary16 halves of `p`
#[inline]
pub fn unpack_half_2x16(p: u32) -> Vec2 {
    unpack_half_vec2(unpack_uint_2x16(p))
}

/// Reassemble an f64 from its low (x) and high (y) 32-bit words
#[inline]
pub fn pack_double_2x32(v: UVec2) -> f64 {
    bits_to_double(pack_uint_2x32(v.to_array()))
}

/// Split an f64 into its low (x) and high (y) 32-bit words
#[inline]
pub fn unpack_double_2x32(value: f64) -> UVec2 {
    UVec2::from_array(unpack_uint_2x32(double_to_bits(value)))
}
