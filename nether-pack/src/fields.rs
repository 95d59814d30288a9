//! 10-10-10-2 bit-field packing
//!
//! Four components in one u32, field 0 least significant:
//!
//! ```text
//! bit 31 30 29        20 19        10 9          0
//!     [ w ][     z     ][     y     ][     x     ]
//! ```
//!
//! Out-of-range policy is fixed per function:
//! - signed integer fields clamp to `[-512, 511]` (x, y, z) and `[-2, 1]` (w)
//! - unsigned integer fields are masked to their width (values wrap), which
//!   is what a 10-10-10-2 vertex attribute fetch sees on hardware
//! - normalized fields clamp to `[0, 1]` / `[-1, 1]` before scaling

use glam::{IVec4, UVec4, Vec4};

use crate::norm::{pack_snorm_bits, pack_unorm_bits, unpack_snorm_bits, unpack_unorm_bits};

/// Field widths in bits, x to w
pub const FIELD_WIDTHS: [u32; 4] = [10, 10, 10, 2];
/// Field bit offsets, x to w
pub const FIELD_OFFSETS: [u32; 4] = [0, 10, 20, 30];

#[inline]
const fn field_mask(field: usize) -> u32 {
    (1 << FIELD_WIDTHS[field]) - 1
}

/// Place four raw field values, masking each to its width
#[inline]
fn place_fields(raw: [u32; 4]) -> u32 {
    let mut packed = 0;
    for (field, value) in raw.into_iter().enumerate() {
        packed |= (value & field_mask(field)) << FIELD_OFFSETS[field];
    }
    packed
}

/// Extract four zero-extended field values
#[inline]
fn extract_fields(packed: u32) -> [u32; 4] {
    std::array::from_fn(|field| (packed >> FIELD_OFFSETS[field]) & field_mask(field))
}

/// Extract four sign-extended field values
#[inline]
fn extract_signed_fields(packed: u32) -> [i32; 4] {
    std::array::from_fn(|field| {
        // Move the field's top bit to bit 31, then arithmetic-shift back down
        let spare = 32 - FIELD_WIDTHS[field];
        ((packed >> FIELD_OFFSETS[field]) << spare) as i32 >> spare
    })
}

// ============================================================================
// Integer Fields
// ============================================================================

/// Pack a signed integer vector into 10-10-10-2 two's complement fields
///
/// Components are clamped to each field's signed range first.
#[inline]
pub fn pack_i3x10_1x2(v: IVec4) -> u32 {
    let clamped = v.clamp(IVec4::new(-512, -512, -512, -2), IVec4::new(511, 511, 511, 1));
    place_fields(clamped.to_array().map(|c| c as u32))
}

/// Unpack 10-10-10-2 two's complement fields into a signed integer vector
#[inline]
pub fn unpack_i3x10_1x2(p: u32) -> IVec4 {
    IVec4::from_array(extract_signed_fields(p))
}

/// Pack an unsigned integer vector into 10-10-10-2 fields (masked, wraps)
#[inline]
pub fn pack_u3x10_1x2(v: UVec4) -> u32 {
    place_fields(v.to_array())
}

/// Unpack 10-10-10-2 fields into an unsigned integer vector
#[inline]
pub fn unpack_u3x10_1x2(p: u32) -> UVec4 {
    UVec4::from_array(extract_fields(p))
}

// ============================================================================
// Normalized Fields
// ============================================================================

/// Pack a `[0, 1]` vector into 10-10-10-2 unorm fields
#[inline]
pub fn pack_unorm_3x10_1x2(v: Vec4) -> u32 {
    let mut raw = [0u32; 4];
    for (field, c) in v.to_array().into_iter().enumerate() {
        raw[field] = pack_unorm_bits(c, FIELD_WIDTHS[field]);
    }
    place_fields(raw)
}

/// Unpack 10-10-10-2 unorm fields into a `[0, 1]` vector
#[inline]
pub fn unpack_unorm_3x10_1x2(p: u32) -> Vec4 {
    let raw = extract_fields(p);
    Vec4::from_array(std::array::from_fn(|field| {
        unpack_unorm_bits(raw[field], FIELD_WIDTHS[field])
    }))
}

/// Pack a `[-1, 1]` vector into 10-10-10-2 snorm fields
///
/// x, y, z scale by 511; w scales by 1 so it only holds -1, 0 or 1.
#[inline]
pub fn pack_snorm_3x10_1x2(v: Vec4) -> u32 {
    let mut raw = [0u32; 4];
    for (field, c) in v.to_array().into_iter().enumerate() {
        raw[field] = pack_snorm_bits(c, FIELD_WIDTHS[field]) as u32;
    }
    place_fields(raw)
}

/// Unpack 10-10-10-2 snorm fields into a `[-1, 1]` vector
#[inline]
pub fn unpack_snorm_3x10_1x2(p: u32) -> Vec4 {
    let raw = extract_signed_fields(p);
    Vec4::from_array(std::array::from_fn(|field| {
        unpack_snorm_bits(raw[field], FIELD_WIDTHS[field])
    }))
}
