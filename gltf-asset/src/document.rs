//! Scene configuration (the JSON half of a glTF asset)
//!
//! Only the members needed to address binary data are typed: `buffers`,
//! `bufferViews` and `accessors`. `nodes` are kept as opaque JSON for
//! pass-through lookup, and every other member lands in a flattened map so
//! re-serializing a configuration keeps members this crate does not model.
//!
//! Re-serialization is not byte-exact. The four typed arrays are written only
//! when non-empty, so an explicit `"nodes": []` in the source is dropped. glTF
//! requires these arrays to hold at least one item when present, so the
//! output is the normalized form of the same document.
//!
//! Enumerations (`componentType`, `type`) are stored raw. An accessor with an
//! unknown code still decodes; only resolving it fails.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AccessError, IndexKind};
use crate::types::{ComponentType, ElementType};

/// Parsed glTF JSON document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buffers: Vec<Buffer>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buffer_views: Vec<BufferView>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accessors: Vec<Accessor>,

    /// Scene nodes, not interpreted here
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Value>,

    /// Everything else (`asset`, `meshes`, `scenes`, extensions, ...)
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Buffer metadata. The bytes themselves live in a [`Segment`](crate::Segment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    pub byte_length: usize,

    /// External file reference; absent for the container's BIN chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contiguous region of one buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    pub buffer: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<usize>,

    pub byte_length: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_stride: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BufferView {
    /// Byte offset within the buffer (0 when omitted)
    #[inline]
    pub fn offset(&self) -> usize {
        self.byte_offset.unwrap_or(0)
    }
}

/// Typed projection of a buffer view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_view: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<usize>,

    /// Raw GL component code (see [`ComponentType`])
    pub component_type: u32,

    /// Raw element type name (see [`ElementType`])
    #[serde(rename = "type")]
    pub type_: String,

    pub count: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Accessor {
    /// Buffer view index (0 when omitted)
    #[inline]
    pub fn buffer_view_index(&self) -> usize {
        self.buffer_view.unwrap_or(0)
    }

    /// Byte offset within the buffer view (0 when omitted)
    #[inline]
    pub fn offset(&self) -> usize {
        self.byte_offset.unwrap_or(0)
    }

    pub fn component(&self) -> Result<ComponentType, AccessError> {
        ComponentType::try_from(self.component_type)
    }

    pub fn element(&self) -> Result<ElementType, AccessError> {
        self.type_.parse()
    }

    /// Packed size of one element in bytes
    pub fn element_size(&self) -> Result<usize, AccessError> {
        Ok(self.element()?.component_count() * self.component()?.byte_width())
    }

    /// `min` bounds as floats, skipping non-numeric entries
    pub fn min_values(&self) -> Option<Vec<f64>> {
        self.min
            .as_ref()
            .map(|v| v.iter().filter_map(Value::as_f64).collect())
    }

    /// `max` bounds as floats, skipping non-numeric entries
    pub fn max_values(&self) -> Option<Vec<f64>> {
        self.max
            .as_ref()
            .map(|v| v.iter().filter_map(Value::as_f64).collect())
    }
}

impl Configuration {
    /// Skeleton document for assembling an asset in memory.
    ///
    /// Use [`Configuration::default`] for the empty document `{}`.
    pub fn new() -> Self {
        let mut other = Map::new();
        other.insert(
            "asset".to_string(),
            serde_json::json!({
                "version": "2.0",
                "generator": concat!("gltf-asset ", env!("CARGO_PKG_VERSION")),
            }),
        );
        other.insert("extensions".to_string(), Value::Object(Map::new()));
        other.insert("extensionsUsed".to_string(), Value::Array(Vec::new()));
        other.insert("extensionsRequired".to_string(), Value::Array(Vec::new()));

        Self {
            other,
            ..Self::default()
        }
    }

    /// Parse a standalone `.gltf` document or a JSON chunk payload
    pub fn from_slice(json: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(json)
    }

    pub fn accessor(&self, index: usize) -> Result<&Accessor, AccessError> {
        self.accessors
            .get(index)
            .ok_or(AccessError::IndexOutOfRange {
                kind: IndexKind::Accessor,
                index,
                len: self.accessors.len(),
            })
    }

    pub fn buffer_view(&self, index: usize) -> Result<&BufferView, AccessError> {
        self.buffer_views
            .get(index)
            .ok_or(AccessError::IndexOutOfRange {
                kind: IndexKind::BufferView,
                index,
                len: self.buffer_views.len(),
            })
    }

    pub fn buffer(&self, index: usize) -> Result<&Buffer, AccessError> {
        self.buffers.get(index).ok_or(AccessError::IndexOutOfRange {
            kind: IndexKind::Buffer,
            index,
            len: self.buffers.len(),
        })
    }

    pub fn node(&self, index: usize) -> Result<&Value, AccessError> {
        self.nodes.get(index).ok_or(AccessError::IndexOutOfRange {
            kind: IndexKind::Node,
            index,
            len: self.nodes.len(),
        })
    }

    /// `asset.version`, if present
    pub fn asset_version(&self) -> Option<&str> {
        self.other.get("asset")?.get("version")?.as_str()
    }
}
