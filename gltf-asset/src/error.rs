//! Error types for container decoding and accessor resolution.
//!
//! Decoding failures abort the whole load. Resolution failures are per-call:
//! a bad index or enum value fails that one lookup and leaves the [`Asset`]
//! usable.
//!
//! [`Asset`]: crate::Asset

use std::fmt;

/// Structural failure while walking a GLB container.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid GLB magic 0x{0:08X} (expected 0x46546C67 \"glTF\")")]
    InvalidMagic(u32),

    #[error("unsupported GLB version {0} (only version 2 is supported)")]
    UnsupportedVersion(u32),

    #[error("declared container length {declared} does not match actual length {actual}")]
    LengthMismatch { declared: u32, actual: usize },

    #[error("unsupported chunk type 0x{0:08X}")]
    UnsupportedChunkType(u32),

    #[error("truncated container at byte {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Only raised under [`ChunkAlignmentPolicy::Reject`](crate::ChunkAlignmentPolicy::Reject).
    #[error("chunk at byte {offset} has length {length}, not a multiple of 4")]
    MisalignedChunkLength { offset: usize, length: u32 },

    /// Only raised under [`DuplicateJsonPolicy::Reject`](crate::DuplicateJsonPolicy::Reject).
    #[error("second JSON chunk at byte {offset}")]
    DuplicateJsonChunk { offset: usize },

    #[error("JSON chunk could not be parsed: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Which arena an out-of-range index pointed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Accessor,
    BufferView,
    Buffer,
    Node,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexKind::Accessor => "accessor",
            IndexKind::BufferView => "bufferView",
            IndexKind::Buffer => "buffer",
            IndexKind::Node => "node",
        };
        f.write_str(name)
    }
}

/// Failure of a single lookup or view resolution against an asset.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("{kind} index {index} out of range ({len} available)")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    #[error("unsupported component type {0}")]
    UnsupportedComponentType(u32),

    #[error("unsupported element type {0:?}")]
    UnsupportedElementType(String),

    #[error("byte offset {offset} is not a multiple of component width {width}")]
    MisalignedOffset { offset: usize, width: usize },

    #[error("byte range {start}..{end} exceeds limit {limit}")]
    ByteRangeOutOfBounds { start: usize, end: usize, limit: usize },

    /// A byte offset or length does not fit in `usize`
    #[error("byte arithmetic on {lhs} and {rhs} overflows")]
    ArithmeticOverflow { lhs: usize, rhs: usize },

    #[error("unknown vertex attribute semantic {0:?}")]
    UnknownAttribute(String),

    #[error("attribute {semantic} requires {expected} accessors, found {found}")]
    AttributeTypeMismatch {
        semantic: String,
        expected: String,
        found: String,
    },

    #[error("configuration declares {buffers} buffers but {segments} segments were supplied")]
    SegmentCountMismatch { buffers: usize, segments: usize },

    #[error("asset has been disposed")]
    Disposed,

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
