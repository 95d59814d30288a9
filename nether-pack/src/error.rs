//! Errors for the vertex stream surface
//!
//! The scalar and vector codecs never fail; only structurally malformed
//! stream input (wrong lengths, unknown format names) is reported here.

use crate::format::AttributeFormat;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    #[error("Unknown attribute format: {0}")]
    UnknownFormat(String),

    #[error("{format} takes {expected} components, got {actual}")]
    ComponentCount {
        format: AttributeFormat,
        expected: usize,
        actual: usize,
    },

    #[error("{format} occupies {expected} bytes, got {actual}")]
    ByteLength {
        format: AttributeFormat,
        expected: usize,
        actual: usize,
    },

    #[error("Stream length {len} is not a multiple of the vertex size {stride}")]
    StreamLength { stride: usize, len: usize },

    #[error("Vertex layout has no attributes")]
    EmptyLayout,
}
