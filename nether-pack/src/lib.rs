//! Bit-exact packing of numeric vectors into fixed-width integers
//!
//! Mirrors the GLSL "Floating-Point Pack and Unpack Functions" and GLM's
//! packing extensions. Every codec is a pure, total function: out-of-range
//! input is clamped or wrapped according to a fixed per-function rule, never
//! rejected.
//!
//! # Modules
//!
//! - [`bits`] - f32/f64/binary16 bit reinterpretation
//! - [`norm`] - unorm/snorm fixed point, generic over width and lane count
//! - [`lanes`] - uniform lane packing (2x8, 4x8, 2x16, 4x16, 2x32)
//! - [`fields`] - 10-10-10-2 integer and normalized bit fields
//! - [`float16`] - half-float vectors and slices
//! - [`glsl`] - GLSL built-ins (`packUnorm4x8`, `packHalf2x16`, ...)
//! - [`packed_float`] - unsigned 11/10-bit floats (`packF2x11_1x10`)
//! - [`format`] - vertex attribute formats and interleaved streams

pub mod bits;
pub mod error;
pub mod fields;
pub mod float16;
pub mod format;
pub mod glsl;
pub mod lanes;
pub mod norm;
pub mod packed_float;

pub use error::PackError;
pub use format::{Attribute, AttributeFormat, VertexLayout};

// Re-export the codec surface at the crate root
pub use bits::{
    bits_to_double, bits_to_float, double_to_bits, float_to_bits, float_to_half_bits,
    half_bits_to_float,
};
pub use fields::{
    pack_i3x10_1x2, pack_snorm_3x10_1x2, pack_u3x10_1x2, pack_unorm_3x10_1x2, unpack_i3x10_1x2,
    unpack_snorm_3x10_1x2, unpack_u3x10_1x2, unpack_unorm_3x10_1x2,
};
pub use float16::{pack_half, unpack_half};
pub use glsl::{
    pack_double_2x32, pack_half_2x16, pack_snorm_2x16, pack_snorm_4x8, pack_unorm_2x16,
    pack_unorm_4x8, unpack_double_2x32, unpack_half_2x16, unpack_snorm_2x16, unpack_snorm_4x8,
    unpack_unorm_2x16, unpack_unorm_4x8,
};
pub use lanes::{
    Lane, pack_int_2x8, pack_int_2x16, pack_int_2x32, pack_int_4x8, pack_int_4x16, pack_lanes,
    pack_uint_2x8, pack_uint_2x16, pack_uint_2x32, pack_uint_4x8, pack_uint_4x16, unpack_int_2x8,
    unpack_int_2x16, unpack_int_2x32, unpack_int_4x8, unpack_int_4x16, unpack_lanes,
    unpack_uint_2x8, unpack_uint_2x16, unpack_uint_2x32, unpack_uint_4x8, unpack_uint_4x16,
};
pub use norm::{Snorm, Unorm, pack_snorm, pack_unorm, unpack_snorm, unpack_unorm};
pub use packed_float::{pack_f2x11_1x10, unpack_f2x11_1x10};
