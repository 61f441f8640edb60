//! glTF document construction

use crate::buffer::{AccessorIndex, BufferBuilder};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Builder for the JSON half of a fixture
#[derive(Default)]
pub struct GltfBuilder {
    nodes: Vec<json::Node>,
    meshes: Vec<json::Mesh>,
    scenes: Vec<json::Scene>,
    buffer_uris: BTreeMap<usize, String>,
}

impl GltfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference buffer `index` by an external URI instead of a BIN chunk
    pub fn buffer_uri(mut self, index: usize, uri: &str) -> Self {
        self.buffer_uris.insert(index, uri.to_string());
        self
    }

    /// Add a node from raw JSON (e.g. `{"name": "root", "mesh": 0}`)
    pub fn add_node(mut self, node: json::Value) -> anyhow::Result<Self> {
        self.nodes.push(serde_json::from_value(node)?);
        Ok(self)
    }

    /// Add a single-primitive triangle mesh
    pub fn add_mesh(
        mut self,
        name: &str,
        attributes: &[(json::mesh::Semantic, AccessorIndex)],
        indices: Option<AccessorIndex>,
    ) -> Self {
        let attributes = attributes
            .iter()
            .map(|(semantic, accessor)| (Valid(semantic.clone()), accessor.as_json_index()))
            .collect();

        let primitive = json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices: indices.map(|i| i.as_json_index()),
            material: None,
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        };

        self.meshes.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            primitives: vec![primitive],
            weights: None,
        });
        self
    }

    pub fn add_scene(mut self, name: &str, root_nodes: &[u32]) -> Self {
        self.scenes.push(json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            nodes: root_nodes.iter().map(|n| json::Index::new(*n)).collect(),
        });
        self
    }

    /// Build the final root with buffers, views and accessors taken from `packed`
    pub fn build(self, packed: &BufferBuilder, generator: &str) -> json::Root {
        let buffers = packed
            .buffers()
            .iter()
            .enumerate()
            .map(|(index, data)| json::Buffer {
                byte_length: data.len().into(),
                extensions: Default::default(),
                extras: Default::default(),
                name: None,
                uri: self.buffer_uris.get(&index).cloned(),
            })
            .collect();

        json::Root {
            accessors: packed.accessors().to_vec(),
            animations: Vec::new(),
            asset: json::Asset {
                copyright: None,
                extensions: Default::default(),
                extras: Default::default(),
                generator: Some(generator.to_string()),
                min_version: None,
                version: "2.0".to_string(),
            },
            buffers,
            buffer_views: packed.views().to_vec(),
            cameras: Vec::new(),
            extensions: Default::default(),
            extensions_required: Vec::new(),
            extensions_used: Vec::new(),
            extras: Default::default(),
            images: Vec::new(),
            materials: Vec::new(),
            meshes: self.meshes,
            nodes: self.nodes,
            samplers: Vec::new(),
            scene: if self.scenes.is_empty() {
                None
            } else {
                Some(json::Index::new(0))
            },
            scenes: self.scenes,
            skins: Vec::new(),
            textures: Vec::new(),
        }
    }
}
