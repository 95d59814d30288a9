//! Vertex attribute formats and interleaved vertex streams
//!
//! An [`AttributeFormat`] names one packed encoding for a group of f32
//! components; a [`VertexLayout`] is an ordered list of attributes. Packing
//! a stream converts f32 vertex data into GPU-ready bytes, one vertex after
//! another, attributes interleaved in layout order.
//!
//! All multi-byte values are written little-endian.
//!
//! # Layout file (TOML)
//! ```toml
//! [[attribute]]
//! name = "position"
//! format = "float16x4"
//!
//! [[attribute]]
//! name = "color"
//! format = "unorm8x4"
//! ```

use std::fmt;
use std::str::FromStr;

use bytemuck::cast_slice;
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::PackError;
use crate::fields::{
    pack_snorm_3x10_1x2, pack_unorm_3x10_1x2, unpack_snorm_3x10_1x2, unpack_unorm_3x10_1x2,
};
use crate::float16::{pack_half, unpack_half};
use crate::norm::{pack_snorm, pack_unorm, unpack_snorm, unpack_unorm};
use crate::packed_float::{pack_f2x11_1x10, unpack_f2x11_1x10};

/// Packed encoding of one vertex attribute
///
/// Names are matched case-insensitively and with surrounding whitespace
/// ignored, both by [`FromStr`] and when deserializing layout files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum AttributeFormat {
    Float32x2,
    Float32x3,
    Float32x4,
    Float16x2,
    Float16x4,
    Unorm8x4,
    Snorm8x4,
    Unorm16x2,
    Unorm16x4,
    Snorm16x2,
    Snorm16x4,
    /// Three 10-bit unorm fields and a 2-bit unorm field in one u32
    Unorm10_10_10_2,
    /// Three 10-bit snorm fields and a 2-bit snorm field in one u32
    Snorm10_10_10_2,
    /// Two unsigned 11-bit floats and one unsigned 10-bit float in one u32
    Ufloat11_11_10,
}

impl AttributeFormat {
    /// Every supported format, in declaration order
    pub const ALL: [AttributeFormat; 14] = [
        AttributeFormat::Float32x2,
        AttributeFormat::Float32x3,
        AttributeFormat::Float32x4,
        AttributeFormat::Float16x2,
        AttributeFormat::Float16x4,
        AttributeFormat::Unorm8x4,
        AttributeFormat::Snorm8x4,
        AttributeFormat::Unorm16x2,
        AttributeFormat::Unorm16x4,
        AttributeFormat::Snorm16x2,
        AttributeFormat::Snorm16x4,
        AttributeFormat::Unorm10_10_10_2,
        AttributeFormat::Snorm10_10_10_2,
        AttributeFormat::Ufloat11_11_10,
    ];

    /// Lower-case name, as used in layout files and on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            AttributeFormat::Float32x2 => "float32x2",
            AttributeFormat::Float32x3 => "float32x3",
            AttributeFormat::Float32x4 => "float32x4",
            AttributeFormat::Float16x2 => "float16x2",
            AttributeFormat::Float16x4 => "float16x4",
            AttributeFormat::Unorm8x4 => "unorm8x4",
            AttributeFormat::Snorm8x4 => "snorm8x4",
            AttributeFormat::Unorm16x2 => "unorm16x2",
            AttributeFormat::Unorm16x4 => "unorm16x4",
            AttributeFormat::Snorm16x2 => "snorm16x2",
            AttributeFormat::Snorm16x4 => "snorm16x4",
            AttributeFormat::Unorm10_10_10_2 => "unorm10_10_10_2",
            AttributeFormat::Snorm10_10_10_2 => "snorm10_10_10_2",
            AttributeFormat::Ufloat11_11_10 => "ufloat11_11_10",
        }
    }

    /// Number of f32 components consumed per attribute
    pub const fn components(&self) -> usize {
        match self {
            AttributeFormat::Float32x2
            | AttributeFormat::Float16x2
            | AttributeFormat::Unorm16x2
            | AttributeFormat::Snorm16x2 => 2,
            AttributeFormat::Float32x3 | AttributeFormat::Ufloat11_11_10 => 3,
            AttributeFormat::Float32x4
            | AttributeFormat::Float16x4
            | AttributeFormat::Unorm8x4
            | AttributeFormat::Snorm8x4
            | AttributeFormat::Unorm16x4
            | AttributeFormat::Snorm16x4
            | AttributeFormat::Unorm10_10_10_2
            | AttributeFormat::Snorm10_10_10_2 => 4,
        }
    }

    /// Packed size in bytes
    pub const fn byte_size(&self) -> usize {
        match self {
            AttributeFormat::Float32x2 => 8,
            AttributeFormat::Float32x3 => 12,
            AttributeFormat::Float32x4 => 16,
            AttributeFormat::Float16x4
            | AttributeFormat::Unorm16x4
            | AttributeFormat::Snorm16x4 => 8,
            AttributeFormat::Float16x2
            | AttributeFormat::Unorm8x4
            | AttributeFormat::Snorm8x4
            | AttributeFormat::Unorm16x2
            | AttributeFormat::Snorm16x2
            | AttributeFormat::Unorm10_10_10_2
            | AttributeFormat::Snorm10_10_10_2
            | AttributeFormat::Ufloat11_11_10 => 4,
        }
    }

    /// Append the packed encoding of `components` to `out`
    pub fn encode(&self, components: &[f32], out: &mut Vec<u8>) -> Result<(), PackError> {
        if components.len() != self.components() {
            return Err(PackError::ComponentCount {
                format: *self,
                expected: self.components(),
                actual: components.len(),
            });
        }

        match self {
            AttributeFormat::Float32x2 | AttributeFormat::Float32x3 | AttributeFormat::Float32x4 => {
                for c in components {
                    out.extend_from_slice(&c.to_le_bytes());
                }
            }
            AttributeFormat::Float16x2 => extend_u16(out, &pack_half(to_array::<_, 2>(components))),
            AttributeFormat::Float16x4 => extend_u16(out, &pack_half(to_array::<_, 4>(components))),
            AttributeFormat::Unorm8x4 => {
                let bytes: [u8; 4] = pack_unorm(to_array::<_, 4>(components));
                out.extend_from_slice(&bytes);
            }
            AttributeFormat::Snorm8x4 => {
                let bytes: [i8; 4] = pack_snorm(to_array::<_, 4>(components));
                out.extend_from_slice(cast_slice(&bytes));
            }
            AttributeFormat::Unorm16x2 => {
                let lanes: [u16; 2] = pack_unorm(to_array::<_, 2>(components));
                extend_u16(out, &lanes);
            }
            AttributeFormat::Unorm16x4 => {
                let lanes: [u16; 4] = pack_unorm(to_array::<_, 4>(components));
                extend_u16(out, &lanes);
            }
            AttributeFormat::Snorm16x2 => {
                let lanes: [i16; 2] = pack_snorm(to_array::<_, 2>(components));
                extend_u16(out, &lanes.map(|lane| lane as u16));
            }
            AttributeFormat::Snorm16x4 => {
                let lanes: [i16; 4] = pack_snorm(to_array::<_, 4>(components));
                extend_u16(out, &lanes.map(|lane| lane as u16));
            }
            AttributeFormat::Unorm10_10_10_2 => {
                let packed = pack_unorm_3x10_1x2(Vec4::from_array(to_array(components)));
                out.extend_from_slice(&packed.to_le_bytes());
            }
            AttributeFormat::Snorm10_10_10_2 => {
                let packed = pack_snorm_3x10_1x2(Vec4::from_array(to_array(components)));
                out.extend_from_slice(&packed.to_le_bytes());
            }
            AttributeFormat::Ufloat11_11_10 => {
                let packed = pack_f2x11_1x10(Vec3::from_array(to_array(components)));
                out.extend_from_slice(&packed.to_le_bytes());
            }
        }

        Ok(())
    }

    /// Decode one packed attribute back to f32 components
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<f32>, PackError> {
        if bytes.len() != self.byte_size() {
            return Err(PackError::ByteLength {
                format: *self,
                expected: self.byte_size(),
                actual: bytes.len(),
            });
        }

        let components = match self {
            AttributeFormat::Float32x2 | AttributeFormat::Float32x3 | AttributeFormat::Float32x4 => {
                bytes
                    .chunks_exact(4)
                    .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                    .collect()
            }
            AttributeFormat::Float16x2 => unpack_half(read_u16::<2>(bytes)).to_vec(),
            AttributeFormat::Float16x4 => unpack_half(read_u16::<4>(bytes)).to_vec(),
            AttributeFormat::Unorm8x4 => {
                let floats: [f32; 4] = unpack_unorm(to_array::<_, 4>(bytes));
                floats.to_vec()
            }
            AttributeFormat::Snorm8x4 => {
                let lanes = to_array::<_, 4>(bytes).map(|b| b as i8);
                let floats: [f32; 4] = unpack_snorm(lanes);
                floats.to_vec()
            }
            AttributeFormat::Unorm16x2 => {
                let floats: [f32; 2] = unpack_unorm(read_u16::<2>(bytes));
                floats.to_vec()
            }
            AttributeFormat::Unorm16x4 => {
                let floats: [f32; 4] = unpack_unorm(read_u16::<4>(bytes));
                floats.to_vec()
            }
            AttributeFormat::Snorm16x2 => {
                let floats: [f32; 2] = unpack_snorm(read_u16::<2>(bytes).map(|v| v as i16));
                floats.to_vec()
            }
            AttributeFormat::Snorm16x4 => {
                let floats: [f32; 4] = unpack_snorm(read_u16::<4>(bytes).map(|v| v as i16));
                floats.to_vec()
            }
            AttributeFormat::Unorm10_10_10_2 => {
                unpack_unorm_3x10_1x2(read_u32(bytes)).to_array().to_vec()
            }
            AttributeFormat::Snorm10_10_10_2 => {
                unpack_snorm_3x10_1x2(read_u32(bytes)).to_array().to_vec()
            }
            AttributeFormat::Ufloat11_11_10 => unpack_f2x11_1x10(read_u32(bytes)).to_array().to_vec(),
        };

        Ok(components)
    }
}

impl fmt::Display for AttributeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttributeFormat {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AttributeFormat::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| PackError::UnknownFormat(s.to_string()))
    }
}

impl TryFrom<String> for AttributeFormat {
    type Error = PackError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// Callers have already checked the slice length
fn to_array<T: Copy, const N: usize>(values: &[T]) -> [T; N] {
    std::array::from_fn(|i| values[i])
}

fn read_u16<const N: usize>(bytes: &[u8]) -> [u16; N] {
    std::array::from_fn(|i| u16::from_le_bytes([bytes[2 * i], bytes[2 * i + 1]]))
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(to_array(bytes))
}

fn extend_u16(out: &mut Vec<u8>, values: &[u16]) {
    for value in values {
        out.extend_from_slice(&value.to_le_bytes());
    }
}

// ============================================================================
// Vertex Layout
// ============================================================================

/// A named attribute within a vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub name: String,
    pub format: AttributeFormat,
}

impl Attribute {
    pub fn new(name: impl Into<String>, format: AttributeFormat) -> Self {
        Self {
            name: name.into(),
            format,
        }
    }
}

/// Ordered list of attributes making up one interleaved vertex
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexLayout {
    #[serde(rename = "attribute", default)]
    pub attributes: Vec<Attribute>,
}

impl VertexLayout {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// Packed bytes per vertex
    pub fn stride(&self) -> usize {
        self.attributes.iter().map(|a| a.format.byte_size()).sum()
    }

    /// Unpacked f32 components per vertex
    pub fn components_per_vertex(&self) -> usize {
        self.attributes.iter().map(|a| a.format.components()).sum()
    }

    /// Reject layouts that cannot describe a vertex
    pub fn validate(&self) -> Result<(), PackError> {
        if self.attributes.is_empty() {
            tracing::warn!("vertex layout has no attributes");
            return Err(PackError::EmptyLayout);
        }
        tracing::debug!(
            attributes = self.attributes.len(),
            stride = self.stride(),
            components = self.components_per_vertex(),
            "validated vertex layout"
        );
        Ok(())
    }

    /// Pack flat f32 vertex data (attributes in layout order, vertex after vertex)
    pub fn pack(&self, data: &[f32]) -> Result<Vec<u8>, PackError> {
        self.validate()?;

        let components = self.components_per_vertex();
        if data.len() % components != 0 {
            return Err(PackError::StreamLength {
                stride: components,
                len: data.len(),
            });
        }

        let vertex_count = data.len() / components;
        tracing::debug!(
            vertex_count,
            stride = self.stride(),
            "packing vertex stream"
        );

        let mut packed = Vec::with_capacity(vertex_count * self.stride());
        for vertex in data.chunks_exact(components) {
            let mut offset = 0;
            for attribute in &self.attributes {
                let count = attribute.format.components();
                attribute
                    .format
                    .encode(&vertex[offset..offset + count], &mut packed)?;
                offset += count;
            }
        }

        Ok(packed)
    }

    /// Unpack a packed vertex stream back to flat f32 data
    pub fn unpack(&self, bytes: &[u8]) -> Result<Vec<f32>, PackError> {
        self.validate()?;

        let stride = self.stride();
        if bytes.len() % stride != 0 {
            return Err(PackError::StreamLength {
                stride,
                len: bytes.len(),
            });
        }

        let vertex_count = bytes.len() / stride;
        tracing::debug!(vertex_count, stride, "unpacking vertex stream");

        let mut data = Vec::with_capacity(vertex_count * self.components_per_vertex());
        for vertex in bytes.chunks_exact(stride) {
            let mut offset = 0;
            for attribute in &self.attributes {
                let size = attribute.format.byte_size();
                data.extend(attribute.format.decode(&vertex[offset..offset + size])?);
                offset += size;
            }
        }

        Ok(data)
    }
}
