//! Conformance checks against the GLSL / GLM packing contracts.
//!
//! Exercises the crate-root API only, the way downstream code uses it.

use glam::{IVec4, UVec4, Vec2, Vec4};
use nether_pack::*;

// ============================================================================
// Normalized Fixed Point
// ============================================================================

#[test]
fn test_unorm_grid_points_survive_roundtrip() {
    for k in 0..=u8::MAX {
        let x: [f32; 1] = unpack_unorm([k]);
        assert_eq!(pack_unorm::<u8, f32, 1>(x), [k]);
    }
    for k in (0..=u16::MAX).step_by(7) {
        let x: [f32; 1] = unpack_unorm([k]);
        assert_eq!(pack_unorm::<u16, f32, 1>(x), [k]);
    }
    for k in [0, 1, 0x8000_0000, 0xDEAD_BEEF, u32::MAX] {
        let x: [f64; 1] = unpack_unorm([k]);
        assert_eq!(pack_unorm::<u32, f64, 1>(x), [k]);
    }
}

#[test]
fn test_snorm_codes_except_minimum_survive_roundtrip() {
    for i in (i8::MIN + 1)..=i8::MAX {
        let x: [f32; 1] = unpack_snorm([i]);
        assert_eq!(pack_snorm::<i8, f32, 1>(x), [i]);
    }
    let x: [f32; 1] = unpack_snorm([i8::MIN]);
    assert_eq!(x, [-1.0]);
    assert_eq!(pack_snorm::<i8, f32, 1>(x), [-127]);
}

#[test]
fn test_normalized_vectors_keep_component_order() {
    let packed: [u8; 4] = pack_unorm([0.0f32, 1.0 / 255.0, 2.0 / 255.0, 1.0]);
    assert_eq!(packed, [0, 1, 2, 255]);

    let packed: [i16; 2] = pack_snorm([-1.0f32, 0.5]);
    assert_eq!(packed, [-32767, 16384]);
}

// ============================================================================
// Lane Packing
// ============================================================================

#[test]
fn test_uniform_lanes_roundtrip_at_boundaries() {
    for v in [[i8::MIN, i8::MAX], [0, -1], [i8::MAX, i8::MIN]] {
        assert_eq!(unpack_int_2x8(pack_int_2x8(v)), v);
    }
    for v in [[0, u8::MAX], [u8::MAX, 0]] {
        assert_eq!(unpack_uint_2x8(pack_uint_2x8(v)), v);
    }

    let v = [i8::MIN, -1, 0, i8::MAX];
    assert_eq!(unpack_int_4x8(pack_int_4x8(v)), v);
    let v = [0, 1, 0xFE, u8::MAX];
    assert_eq!(unpack_uint_4x8(pack_uint_4x8(v)), v);

    let v = [i16::MIN, i16::MAX];
    assert_eq!(unpack_int_2x16(pack_int_2x16(v)), v);
    let v = [u16::MAX, 0];
    assert_eq!(unpack_uint_2x16(pack_uint_2x16(v)), v);

    let v = [i16::MAX, i16::MIN, -1, 1];
    assert_eq!(unpack_int_4x16(pack_int_4x16(v)), v);
    let v = [u16::MAX, 0, 0x1234, 0x8000];
    assert_eq!(unpack_uint_4x16(pack_uint_4x16(v)), v);

    let v = [i32::MIN, i32::MAX];
    assert_eq!(unpack_int_2x32(pack_int_2x32(v)), v);
    let v = [u32::MAX, 1];
    assert_eq!(unpack_uint_2x32(pack_uint_2x32(v)), v);
}

#[test]
fn test_generic_lanes_agree_with_named_functions() {
    let v = [0x12u8, 0x34, 0x56, 0x78];
    assert_eq!(pack_lanes(v) as u32, pack_uint_4x8(v));
    assert_eq!(unpack_lanes::<u8, 4>(0x7856_3412), v);
}

#[test]
fn test_i3x10_1x2_reference_cases() {
    assert_eq!(pack_i3x10_1x2(IVec4::new(0, 0, 0, 0)), 0);
    assert_eq!(unpack_i3x10_1x2(0), IVec4::new(0, 0, 0, 0));

    let v = IVec4::new(511, -512, 511, 1);
    assert_eq!(unpack_i3x10_1x2(pack_i3x10_1x2(v)), v);
}

#[test]
fn test_u3x10_1x2_roundtrip_in_range() {
    for x in (0..1024).step_by(31) {
        let v = UVec4::new(x, 1023 - x, x / 2, x % 4);
        assert_eq!(unpack_u3x10_1x2(pack_u3x10_1x2(v)), v);
    }
}

// ============================================================================
// Half Float
// ============================================================================

#[test]
fn test_half_reference_bit_patterns() {
    assert_eq!(float_to_half_bits(0.0), 0x0000);
    assert_eq!(float_to_half_bits(-0.0), 0x8000);
    assert_eq!(half_bits_to_float(0x3C00), 1.0);
    assert_eq!(half_bits_to_float(0x7C00), f32::INFINITY);
}

#[test]
fn test_half_vectors_roundtrip() {
    let exact = [1.0, 0.5, -2.0, 0.0];
    assert_eq!(unpack_half(pack_half(exact)), exact);

    let [back] = unpack_half(pack_half([0.1f32]));
    assert!((back - 0.1).abs() <= 0.1 * 2.0f32.powi(-10));
}

#[test]
fn test_float_bits_are_exact_inverses() {
    for bits in [0u32, 1, 0x7F80_0000, 0x7FC0_1234, 0x8000_0000, 0xFFFF_FFFF] {
        assert_eq!(float_to_bits(bits_to_float(bits)), bits);
    }
}

// ============================================================================
// GLSL Built-ins
// ============================================================================

#[test]
fn test_glsl_builtin_reference_values() {
    assert_eq!(pack_unorm_4x8(Vec4::new(1.0, 0.0, 0.0, 1.0)), 0xFF00_00FF);
    assert_eq!(pack_half_2x16(Vec2::new(1.0, -2.0)), 0xC000_3C00);
    assert_eq!(pack_snorm_2x16(Vec2::new(-1.0, 1.0)), 0x7FFF_8001);
    assert_eq!(unpack_unorm_2x16(0x0000_FFFF), Vec2::new(1.0, 0.0));
    assert_eq!(unpack_snorm_4x8(0x0000_007F), Vec4::new(1.0, 0.0, 0.0, 0.0));
}

#[test]
fn test_encoding_is_idempotent() {
    let v = Vec4::new(0.3, -0.7, 0.1, 0.9);
    assert_eq!(pack_snorm_4x8(v), pack_snorm_4x8(v));
    assert_eq!(pack_unorm_3x10_1x2(v), pack_unorm_3x10_1x2(v));
    assert_eq!(pack_half(v.to_array()), pack_half(v.to_array()));
}
