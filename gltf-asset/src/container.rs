//! GLB container decoding
//!
//! # Layout
//! ```text
//! 0x00: magic u32          0x46546C67 ("glTF")
//! 0x04: version u32        2
//! 0x08: length u32         total byte length of the container
//! 0x0C: chunk_length u32   payload length, multiple of 4
//! 0x10: chunk_type u32     0x4E4F534A (JSON) or 0x004E4942 (BIN\0)
//! 0x14: payload            chunk_length bytes
//! ...   further chunks     length / type / payload
//! ```
//!
//! All words are little-endian. Decoding is a pure function over the input;
//! BIN payloads become [`Segment`]s that share the input allocation.

use std::sync::Arc;

use crate::document::Configuration;
use crate::error::DecodeError;
use crate::options::{ChunkAlignmentPolicy, DecodeOptions, DuplicateJsonPolicy};

/// Container magic, "glTF" read as a little-endian word
pub const GLB_MAGIC: u32 = 0x4654_6C67;
/// Only supported container version
pub const GLB_VERSION: u32 = 2;
/// Chunk tag for the JSON configuration, "JSON"
pub const CHUNK_JSON: u32 = 0x4E4F_534A;
/// Chunk tag for binary buffer data, "BIN\0"
pub const CHUNK_BIN: u32 = 0x004E_4942;

/// Size of the container header (magic, version, length)
pub const HEADER_SIZE: usize = 12;
/// Size of a chunk header (length, type)
pub const CHUNK_HEADER_SIZE: usize = 8;

// =============================================================================
// Segment
// =============================================================================

/// Immutable window over shared buffer bytes.
///
/// `byte_offset` is the window's position inside the backing allocation, which
/// matters for alignment: a typed view is only valid when its absolute offset
/// is a multiple of the component width.
#[derive(Clone)]
pub struct Segment {
    data: Arc<[u8]>,
    byte_offset: usize,
    byte_length: usize,
}

impl Segment {
    /// Segment spanning all of `data`
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        let data = data.into();
        let byte_length = data.len();
        Self {
            data,
            byte_offset: 0,
            byte_length,
        }
    }

    /// Window `[byte_offset, byte_offset + byte_length)` of `data`, or `None`
    /// if it does not fit.
    pub fn window(data: Arc<[u8]>, byte_offset: usize, byte_length: usize) -> Option<Self> {
        let end = byte_offset.checked_add(byte_length)?;
        (end <= data.len()).then_some(Self {
            data,
            byte_offset,
            byte_length,
        })
    }

    /// Offset of this segment inside its backing storage
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    #[inline]
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.byte_length == 0
    }

    /// The segment's bytes
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data[self.byte_offset..self.byte_offset + self.byte_length]
    }

    /// Whole backing allocation (shared with sibling segments)
    #[inline]
    pub fn backing(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segment")
            .field("byte_offset", &self.byte_offset)
            .field("byte_length", &self.byte_length)
            .finish()
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.bytes() == other.bytes()
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a GLB container with the default (lenient) policies.
pub fn decode(bytes: impl Into<Arc<[u8]>>) -> Result<(Configuration, Vec<Segment>), DecodeError> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decode a GLB container.
///
/// Returns the parsed configuration (the empty document if the container has
/// no JSON chunk) and one segment per BIN chunk, in encounter order. Any
/// structural failure aborts the decode; nothing partial is returned.
pub fn decode_with(
    bytes: impl Into<Arc<[u8]>>,
    options: &DecodeOptions,
) -> Result<(Configuration, Vec<Segment>), DecodeError> {
    let data: Arc<[u8]> = bytes.into();

    let magic = read_u32(&data, 0)?;
    if magic != GLB_MAGIC {
        return Err(DecodeError::InvalidMagic(magic));
    }
    let version = read_u32(&data, 4)?;
    if version != GLB_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }
    let declared = read_u32(&data, 8)?;
    if declared as usize != data.len() {
        return Err(DecodeError::LengthMismatch {
            declared,
            actual: data.len(),
        });
    }

    let mut config: Option<Configuration> = None;
    let mut segments = Vec::new();
    let mut cursor = HEADER_SIZE;

    while cursor < data.len() {
        let chunk_length = read_u32(&data, cursor)?;
        let chunk_type = read_u32(&data, cursor + 4)?;
        let start = cursor + CHUNK_HEADER_SIZE;
        let end = start.saturating_add(chunk_length as usize);
        if end > data.len() {
            return Err(DecodeError::Truncated {
                offset: start,
                needed: chunk_length as usize,
                available: data.len() - start,
            });
        }

        if chunk_length % 4 != 0 {
            match options.chunk_alignment {
                ChunkAlignmentPolicy::Warn => tracing::warn!(
                    "GLB chunk at byte {} has length {} (not a multiple of 4)",
                    cursor,
                    chunk_length
                ),
                ChunkAlignmentPolicy::Reject => {
                    return Err(DecodeError::MisalignedChunkLength {
                        offset: cursor,
                        length: chunk_length,
                    });
                }
            }
        }

        match chunk_type {
            CHUNK_JSON => {
                if config.is_some() {
                    match options.duplicate_json {
                        DuplicateJsonPolicy::Overwrite => tracing::warn!(
                            "Duplicate GLB JSON chunk at byte {}, replacing previous configuration",
                            cursor
                        ),
                        DuplicateJsonPolicy::Reject => {
                            return Err(DecodeError::DuplicateJsonChunk { offset: cursor });
                        }
                    }
                }
                let payload = trim_nul_padding(&data[start..end]);
                config = Some(Configuration::from_slice(payload)?);
                tracing::debug!("JSON chunk: {} bytes at {}", chunk_length, start);
            }
            CHUNK_BIN => {
                segments.push(Segment {
                    data: Arc::clone(&data),
                    byte_offset: start,
                    byte_length: chunk_length as usize,
                });
                tracing::debug!(
                    "BIN chunk #{}: {} bytes at {}",
                    segments.len() - 1,
                    chunk_length,
                    start
                );
            }
            other => return Err(DecodeError::UnsupportedChunkType(other)),
        }

        cursor = end;
    }

    Ok((config.unwrap_or_default(), segments))
}

/// Read a little-endian word, failing if the input ends first
fn read_u32(data: &[u8], offset: usize) -> Result<u32, DecodeError> {
    data.get(offset..offset + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or(DecodeError::Truncated {
            offset,
            needed: 4,
            available: data.len().saturating_sub(offset),
        })
}

/// Some writers pad the JSON chunk with NULs instead of spaces
fn trim_nul_padding(payload: &[u8]) -> &[u8] {
    let end = payload
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |i| i + 1);
    &payload[..end]
}
