//! Buffer packing: typed data in, buffer views and accessors out

use crate::utils::{align_buffer, compute_bounds};
use bytemuck::Pod;
use gltf_json as json;
use gltf_json::accessor::{ComponentType, Type};
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Buffer view index returned by raw packing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewIndex(pub u32);

/// Byte width of a gltf-json component type
pub fn component_width(component: ComponentType) -> usize {
    match component {
        ComponentType::I8 | ComponentType::U8 => 1,
        ComponentType::I16 | ComponentType::U16 => 2,
        ComponentType::U32 | ComponentType::F32 => 4,
    }
}

/// Components per element of a gltf-json element type
pub fn type_components(type_: Type) -> usize {
    match type_ {
        Type::Scalar => 1,
        Type::Vec2 => 2,
        Type::Vec3 => 3,
        Type::Vec4 | Type::Mat2 => 4,
        Type::Mat3 => 9,
        Type::Mat4 => 16,
    }
}

/// Packs data into one or more binary buffers.
///
/// Every pack call appends a buffer view to the current buffer (the last one
/// started with [`BufferBuilder::start_buffer`]) and pads the buffer to a
/// 4-byte boundary afterwards.
pub struct BufferBuilder {
    buffers: Vec<Vec<u8>>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    /// Create a builder with one empty buffer
    pub fn new() -> Self {
        Self {
            buffers: vec![Vec::new()],
            views: Vec::new(),
            accessors: Vec::new(),
        }
    }

    /// Start a new buffer; later packs go into it. Returns its index.
    pub fn start_buffer(&mut self) -> usize {
        self.buffers.push(Vec::new());
        self.buffers.len() - 1
    }

    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    /// All buffers, in index order
    pub fn buffers(&self) -> &[Vec<u8>] {
        &self.buffers
    }

    /// The current buffer's bytes
    pub fn data(&self) -> &[u8] {
        self.buffers.last().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Append raw bytes as a buffer view without an accessor
    pub fn pack_raw(&mut self, bytes: &[u8]) -> ViewIndex {
        let buffer_index = self.buffers.len() - 1;
        let buffer = &mut self.buffers[buffer_index];
        let offset = buffer.len();
        buffer.extend_from_slice(bytes);
        align_buffer(buffer);

        self.views.push(json::buffer::View {
            buffer: json::Index::new(buffer_index as u32),
            byte_length: bytes.len().into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: None,
        });
        ViewIndex(self.views.len() as u32 - 1)
    }

    /// Add an accessor over an existing view, `byte_offset` bytes into it.
    ///
    /// Several accessors may share one view this way.
    pub fn add_accessor(
        &mut self,
        view: ViewIndex,
        byte_offset: u64,
        count: usize,
        type_: Type,
        component: ComponentType,
    ) -> AccessorIndex {
        self.push_accessor(view, byte_offset, count, type_, component, None, None)
    }

    /// Mark an integer accessor as normalized (e.g. u8 colors)
    pub fn set_normalized(&mut self, accessor: AccessorIndex) {
        if let Some(acc) = self.accessors.get_mut(accessor.0 as usize) {
            acc.normalized = true;
        }
    }

    /// Pack any POD slice as `type_` elements of `component`
    pub fn pack<T: Pod>(&mut self, data: &[T], type_: Type, component: ComponentType) -> AccessorIndex {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let count = bytes.len() / (type_components(type_) * component_width(component));
        let view = self.pack_raw(bytes);
        self.push_accessor(view, 0, count, type_, component, None, None)
    }

    /// Pack Vec3 positions with bounds
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let view = self.pack_raw(bytemuck::cast_slice(positions));
        let (min, max) = compute_bounds(positions);
        self.push_accessor(
            view,
            0,
            positions.len(),
            Type::Vec3,
            ComponentType::F32,
            Some(min),
            Some(max),
        )
    }

    pub fn pack_vec2(&mut self, data: &[[f32; 2]]) -> AccessorIndex {
        self.pack(data, Type::Vec2, ComponentType::F32)
    }

    pub fn pack_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        self.pack(data, Type::Vec3, ComponentType::F32)
    }

    pub fn pack_vec4(&mut self, data: &[[f32; 4]]) -> AccessorIndex {
        self.pack(data, Type::Vec4, ComponentType::F32)
    }

    /// Pack joint indices (Vec4<u16>)
    pub fn pack_joints(&mut self, joints: &[[u16; 4]]) -> AccessorIndex {
        self.pack(joints, Type::Vec4, ComponentType::U16)
    }

    pub fn pack_indices_u16(&mut self, indices: &[u16]) -> AccessorIndex {
        let accessor = self.pack(indices, Type::Scalar, ComponentType::U16);
        if let Some(view) = self.views.last_mut() {
            view.target = Some(Valid(json::buffer::Target::ElementArrayBuffer));
        }
        accessor
    }

    pub fn pack_indices_u32(&mut self, indices: &[u32]) -> AccessorIndex {
        let accessor = self.pack(indices, Type::Scalar, ComponentType::U32);
        if let Some(view) = self.views.last_mut() {
            view.target = Some(Valid(json::buffer::Target::ElementArrayBuffer));
        }
        accessor
    }

    #[allow(clippy::too_many_arguments)]
    fn push_accessor(
        &mut self,
        view: ViewIndex,
        byte_offset: u64,
        count: usize,
        type_: Type,
        component: ComponentType,
        min: Option<Vec<f32>>,
        max: Option<Vec<f32>>,
    ) -> AccessorIndex {
        let bounds = |values: Vec<f32>| {
            json::Value::Array(values.into_iter().map(json::Value::from).collect())
        };
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(view.0)),
            byte_offset: Some(byte_offset.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min: min.map(bounds),
            max: max.map(bounds),
            name: None,
            normalized: false,
            sparse: None,
        });
        AccessorIndex(self.accessors.len() as u32 - 1)
    }
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}
