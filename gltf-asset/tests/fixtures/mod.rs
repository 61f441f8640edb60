//! GLB fixtures shared by the integration tests.

#![allow(dead_code)]

use glb_builder::json::accessor::{ComponentType, Type};
use glb_builder::json::mesh::Semantic;
use glb_builder::{BufferBuilder, GlbWriter, GltfBuilder, assemble_glb};

pub const POSITIONS: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]];
pub const NORMALS: [[f32; 3]; 3] = [[0.0, 0.0, 1.0]; 3];
pub const UVS: [[f32; 2]; 3] = [[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]];
pub const COLORS: [[f32; 4]; 3] = [[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]];
pub const JOINTS: [[u16; 4]; 3] = [[0, 1, 0, 0], [1, 2, 0, 0], [2, 0, 0, 0]];
pub const WEIGHTS: [[f32; 4]; 3] = [[0.5, 0.5, 0.0, 0.0], [0.75, 0.25, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0]];
pub const INDICES: [u16; 3] = [0, 1, 2];

/// Accessor indices in [`mesh_glb`], in packing order
pub mod accessor {
    pub const POSITION: usize = 0;
    pub const NORMAL: usize = 1;
    pub const TEXCOORD_0: usize = 2;
    pub const COLOR_0: usize = 3;
    pub const JOINTS_0: usize = 4;
    pub const WEIGHTS_0: usize = 5;
    pub const INDICES: usize = 6;
}

/// Byte layout of the single buffer in [`mesh_glb`]
pub const NORMAL_OFFSET: usize = 36;
pub const INDICES_OFFSET: usize = 216;
pub const MESH_BUFFER_LENGTH: usize = 224;

/// One skinned triangle with every attribute, packed into a single buffer.
///
/// Returns the container and the packed buffer it was built from.
pub fn mesh_glb() -> (Vec<u8>, Vec<u8>) {
    let mut buffer = BufferBuilder::new();
    let attributes = [
        (Semantic::Positions, buffer.pack_positions(&POSITIONS)),
        (Semantic::Normals, buffer.pack_vec3(&NORMALS)),
        (Semantic::TexCoords(0), buffer.pack_vec2(&UVS)),
        (Semantic::Colors(0), buffer.pack_vec4(&COLORS)),
        (Semantic::Joints(0), buffer.pack_joints(&JOINTS)),
        (Semantic::Weights(0), buffer.pack_vec4(&WEIGHTS)),
    ];
    let indices = buffer.pack_indices_u16(&INDICES);

    let root = GltfBuilder::new()
        .add_mesh("Triangle", &attributes, Some(indices))
        .add_node(serde_json::json!({ "name": "triangle", "mesh": 0 }))
        .unwrap()
        .add_scene("Scene", &[0])
        .build(&buffer, "gltf-asset tests");

    let glb = assemble_glb(&root, buffer.buffers()).unwrap();
    (glb, buffer.buffers()[0].clone())
}

/// Two BIN chunks: Vec4 floats in buffer 0, u32 indices in buffer 1
pub fn two_buffer_glb() -> Vec<u8> {
    let mut buffer = BufferBuilder::new();
    buffer.pack_vec4(&[[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]]);
    buffer.start_buffer();
    buffer.pack_indices_u32(&[7, 8, 9, 10]);

    let root = GltfBuilder::new().build(&buffer, "gltf-asset tests");
    assemble_glb(&root, buffer.buffers()).unwrap()
}

/// Contents of the single view in [`shared_view_glb`]
pub const SHARED_COLORS: [u8; 4] = [255, 128, 0, 255];
pub const SHARED_BYTES: [i8; 4] = [-128, -1, 0, 127];
pub const SHARED_SHORTS: [i16; 2] = [-32768, 32767];
pub const SHARED_JOINTS: [u16; 4] = [3, 2, 1, 0];

/// One 20-byte view read by four accessors at different byte offsets:
/// a normalized u8 VEC4 color at 0, i8 VEC4 at 4, two i16 scalars at 8 and
/// u16 VEC4 joints at 12.
pub fn shared_view_glb() -> Vec<u8> {
    let mut bytes = SHARED_COLORS.to_vec();
    bytes.extend(SHARED_BYTES.map(|v| v as u8));
    bytes.extend(SHARED_SHORTS.iter().flat_map(|v| v.to_le_bytes()));
    bytes.extend(SHARED_JOINTS.iter().flat_map(|v| v.to_le_bytes()));

    let mut buffer = BufferBuilder::new();
    let view = buffer.pack_raw(&bytes);
    let color = buffer.add_accessor(view, 0, 1, Type::Vec4, ComponentType::U8);
    buffer.set_normalized(color);
    buffer.add_accessor(view, 4, 1, Type::Vec4, ComponentType::I8);
    buffer.add_accessor(view, 8, 2, Type::Scalar, ComponentType::I16);
    buffer.add_accessor(view, 12, 1, Type::Vec4, ComponentType::U16);

    let root = GltfBuilder::new().build(&buffer, "gltf-asset tests");
    assemble_glb(&root, buffer.buffers()).unwrap()
}

/// Container from hand-written JSON and one BIN chunk
pub fn hand_written_glb(json: &str, bin: &[u8]) -> Vec<u8> {
    GlbWriter::new().json_text(json).bin_chunk(bin).finish()
}

/// Little-endian bytes of a slice of 32-bit words
pub fn words(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}
