//! GLB container decoding and typed accessor views
//!
//! Decodes a glTF binary container (a JSON configuration plus BIN chunks) and
//! exposes accessors as typed, zero-copy slices over the binary buffers:
//! - `types`: component/element/attribute metadata tables
//! - `document`: the JSON configuration (buffers, buffer views, accessors)
//! - `container`: GLB header and chunk walking
//! - `resolver`: accessor → buffer view → segment offset arithmetic
//! - `view`: the `TypedView` slice enum
//! - `asset`: long-lived owner of configuration and segments
//!
//! # Example
//!
//! ```no_run
//! use gltf_asset::{Asset, AttributeSemantic};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("model.glb")?;
//! let asset = Asset::from_glb("model", bytes)?;
//! let positions = asset.resolve_attribute(AttributeSemantic::Position, 0)?;
//! println!("{} position components", positions.len());
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod container;
pub mod document;
pub mod error;
pub mod options;
pub mod resolver;
pub mod types;
pub mod view;

pub use asset::Asset;
pub use container::{
    CHUNK_BIN, CHUNK_HEADER_SIZE, CHUNK_JSON, GLB_MAGIC, GLB_VERSION, HEADER_SIZE, Segment, decode,
    decode_with,
};
pub use document::{Accessor, Buffer, BufferView, Configuration};
pub use error::{AccessError, DecodeError, IndexKind};
pub use options::{ChunkAlignmentPolicy, DecodeOptions, DuplicateJsonPolicy};
pub use resolver::{
    accessor_buffer_view, accessor_byte_length, accessor_byte_offset, accessor_segment,
    buffer_view_bytes, element_stride, resolve_accessor, resolve_buffer_view,
};
pub use types::{
    AttributeSemantic, ComponentType, ElementType, component_byte_width, element_component_count,
};
pub use view::TypedView;
