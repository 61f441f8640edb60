//! GLB fixture generation for gltf-asset tests
//!
//! Builder-pattern APIs for constructing GLB containers:
//! - BufferBuilder: pack typed data into buffers with 4-byte alignment, or
//!   lay out several accessors over one raw view
//! - GltfBuilder: top-level document construction
//! - GlbWriter: container assembly, including deliberately malformed headers
//!
//! # Example
//!
//! ```no_run
//! use glb_builder::*;
//!
//! let mut buffer = BufferBuilder::new();
//! let positions = buffer.pack_positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]]);
//! let indices = buffer.pack_indices_u16(&[0, 1, 2]);
//!
//! let root = GltfBuilder::new()
//!     .add_mesh("Triangle", &[(json::mesh::Semantic::Positions, positions)], Some(indices))
//!     .build(&buffer, "glb-builder");
//! let glb_bytes = assemble_glb(&root, buffer.buffers()).unwrap();
//! ```

pub mod buffer;
pub mod document;
pub mod glb;
pub mod utils;

pub use buffer::{AccessorIndex, BufferBuilder, ViewIndex, component_width, type_components};
pub use document::GltfBuilder;
pub use glb::{CHUNK_BIN, CHUNK_JSON, GLB_MAGIC, GlbWriter, assemble_glb};
pub use utils::{align_buffer, compute_bounds, pad_to_four};

// Re-export commonly used gltf-json types
pub use gltf_json as json;
pub use gltf_json::validation::Checked::Valid;
