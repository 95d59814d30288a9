//! Uniform lane packing
//!
//! Concatenates N integer lanes of one width into a single wider integer.
//! Lane `i` occupies bits `[i * BITS, (i + 1) * BITS)`, so component 0 is
//! always the least significant lane. Placement is done with shifts, which
//! keeps the layout identical on every host endianness.
//!
//! There is no rounding or clamping: every representable lane value
//! survives a round trip bit for bit. Signed lanes are stored as their
//! two's complement pattern and sign-extended on unpack.
//!
//! | Function | Lanes | Packed |
//! |----------|-------|--------|
//! | [`pack_int_2x8`] / [`pack_uint_2x8`] | 2 × 8 | 16 |
//! | [`pack_int_4x8`] / [`pack_uint_4x8`] | 4 × 8 | 32 |
//! | [`pack_int_2x16`] / [`pack_uint_2x16`] | 2 × 16 | 32 |
//! | [`pack_int_4x16`] / [`pack_uint_4x16`] | 4 × 16 | 64 |
//! | [`pack_int_2x32`] / [`pack_uint_2x32`] | 2 × 32 | 64 |

/// An integer that can occupy a lane of a packed integer
pub trait Lane: Copy {
    /// Lane width in bits
    const BITS: u32;

    /// Raw bit pattern, zero-extended to 64 bits
    fn to_raw(self) -> u64;

    /// Rebuild from the low `BITS` bits of `raw` (sign-extending signed lanes)
    fn from_raw(raw: u64) -> Self;
}

macro_rules! impl_lane {
    ($($int:ty => $unsigned:ty),* $(,)?) => {$(
        impl Lane for $int {
            const BITS: u32 = <$int>::BITS;

            #[inline]
            fn to_raw(self) -> u64 {
                self as $unsigned as u64
            }

            #[inline]
            fn from_raw(raw: u64) -> Self {
                raw as $unsigned as $int
            }
        }
    )*};
}

impl_lane!(
    u8 => u8, i8 => u8,
    u16 => u16, i16 => u16,
    u32 => u32, i32 => u32,
);

/// Pack `N` lanes into the low `N * L::BITS` bits of a u64
///
/// `N * L::BITS` must not exceed 64.
#[inline]
pub fn pack_lanes<L: Lane, const N: usize>(lanes: [L; N]) -> u64 {
    debug_assert!(N as u32 * L::BITS <= 64);
    lanes
        .iter()
        .enumerate()
        .fold(0u64, |packed, (i, lane)| packed | (lane.to_raw() << (i as u32 * L::BITS)))
}

/// Split the low `N * L::BITS` bits of a u64 into `N` lanes
#[inline]
pub fn unpack_lanes<L: Lane, const N: usize>(packed: u64) -> [L; N] {
    debug_assert!(N as u32 * L::BITS <= 64);
    std::array::from_fn(|i| L::from_raw(packed >> (i as u32 * L::BITS)))
}

// ============================================================================
// 8-bit Lanes
// ============================================================================

/// Pack two i8 lanes into an i16
#[inline]
pub fn pack_int_2x8(v: [i8; 2]) -> i16 {
    pack_lanes(v) as u16 as i16
}

/// Unpack an i16 into two i8 lanes
#[inline]
pub fn unpack_int_2x8(p: i16) -> [i8; 2] {
    unpack_lanes(p as u16 as u64)
}

/// Pack two u8 lanes into a u16
#[inline]
pub fn pack_uint_2x8(v: [u8; 2]) -> u16 {
    pack_lanes(v) as u16
}

/// Unpack a u16 into two u8 lanes
#[inline]
pub fn unpack_uint_2x8(p: u16) -> [u8; 2] {
    unpack_lanes(p as u64)
}

/// Pack four i8 lanes into an i32
#[inline]
pub fn pack_int_4x8(v: [i8; 4]) -> i32 {
    pack_lanes(v) as u32 as i32
}

/// Unpack an i32 into four i8 lanes
#[inline]
pub fn unpack_int_4x8(p: i32) -> [i8; 4] {
    unpack_lanes(p as u32 as u64)
}

/// Pack four u8 lanes into a u32
#[inline]
pub fn pack_uint_4x8(v: [u8; 4]) -> u32 {
    pack_lanes(v) as u32
}

/// Unpack a u32 into four u8 lanes
#[inline]
pub fn unpack_uint_4x8(p: u32) -> [u8; 4] {
    unpack_lanes(p as u64)
}

// ============================================================================
// 16-bit Lanes
// ============================================================================

/// Pack two i16 lanes into an i32
#[inline]
pub fn pack_int_2x16(v: [i16; 2]) -> i32 {
    pack_lanes(v) as u32 as i32
}

/// Unpack an i32 into two i16 lanes
#[inline]
pub fn unpack_int_2x16(p: i32) -> [i16; 2] {
    unpack_lanes(p as u32 as u64)
}

/// Pack two u16 lanes into a u32
#[inline]
pub fn pack_uint_2x16(v: [u16; 2]) -> u32 {
    pack_lanes(v) as u32
}

/// Unpack a u32 into two u16 lanes
#[inline]
pub fn unpack_uint_2x16(p: u32) -> [u16; 2] {
    unpack_lanes(p as u64)
}

/// Pack four i16 lanes into an i64
#[inline]
pub fn pack_int_4x16(v: [i16; 4]) -> i64 {
    pack_lanes(v) as i64
}

/// Unpack an i64 into four i16 lanes
#[inline]
pub fn unpack_int_4x16(p: i64) -> [i16; 4] {
    unpack_lanes(p as u64)
}

/// Pack four u16 lanes into a u64
#[inline]
pub fn pack_uint_4x16(v: [u16; 4]) -> u64 {
    pack_lanes(v)
}

/// Unpack a u64 into four u16 lanes
#[inline]
pub fn unpack_uint_4x16(p: u64) -> [u16; 4] {
    unpack_lanes(p)
}

// ============================================================================
// 32-bit Lanes
// ============================================================================

/// Pack two i32 lanes into an i64
#[inline]
pub fn pack_int_2x32(v: [i32; 2]) -> i64 {
    pack_lanes(v) as i64
}

/// Unpack an i64 into two i32 lanes
#[inline]
pub fn unpack_int_2x32(p: i64) -> [i32; 2] {
    unpack_lanes(p as u64)
}

/// Pack two u32 lanes into a u64
#[inline]
pub fn pack_uint_2x32(v: [u32; 2]) -> u64 {
    pack_lanes(v)
}

/// Unpack a u64 into two u32 lanes
#[inline]
pub fn unpack_uint_2x32(p: u64) -> [u32; 2] {
    unpack_lanes(p)
}
