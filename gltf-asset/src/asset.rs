//! Loaded glTF asset: owns the configuration and its buffer segments

use std::sync::Arc;

use serde_json::Value;

use crate::container::{Segment, decode_with};
use crate::document::{Accessor, BufferView, Configuration};
use crate::error::AccessError;
use crate::options::DecodeOptions;
use crate::resolver;
use crate::types::{AttributeSemantic, ComponentType};
use crate::view::TypedView;

/// A decoded asset.
///
/// Views returned by the `resolve_*` methods borrow the asset, so they cannot
/// outlive [`Asset::dispose`]. After disposal every lookup fails with
/// [`AccessError::Disposed`].
#[derive(Debug)]
pub struct Asset {
    name: String,
    config: Option<Configuration>,
    segments: Vec<Segment>,
}

impl Asset {
    /// Take ownership of already-decoded parts without checking them
    pub fn new(name: impl Into<String>, config: Configuration, segments: Vec<Segment>) -> Self {
        let name = name.into();
        tracing::debug!(
            "Asset {:?}: {} accessors, {} buffer views, {} segments",
            name,
            config.accessors.len(),
            config.buffer_views.len(),
            segments.len()
        );
        Self {
            name,
            config: Some(config),
            segments,
        }
    }

    /// Assemble an asset from a configuration and separately loaded buffers.
    ///
    /// There must be exactly one segment per entry in `buffers`.
    pub fn from_parts(
        name: impl Into<String>,
        config: Configuration,
        segments: Vec<Segment>,
    ) -> Result<Self, AccessError> {
        if config.buffers.len() != segments.len() {
            return Err(AccessError::SegmentCountMismatch {
                buffers: config.buffers.len(),
                segments: segments.len(),
            });
        }
        Ok(Self::new(name, config, segments))
    }

    /// Decode a GLB container with default options
    pub fn from_glb(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Result<Self, AccessError> {
        Self::from_glb_with(name, bytes, &DecodeOptions::default())
    }

    pub fn from_glb_with(
        name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
        options: &DecodeOptions,
    ) -> Result<Self, AccessError> {
        let (config, segments) = decode_with(bytes, options)?;
        Ok(Self::new(name, config, segments))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_disposed(&self) -> bool {
        self.config.is_none()
    }

    pub fn config(&self) -> Result<&Configuration, AccessError> {
        self.config.as_ref().ok_or(AccessError::Disposed)
    }

    /// Buffer segments in `buffers` order (empty once disposed)
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn accessor(&self, index: usize) -> Result<&Accessor, AccessError> {
        self.config()?.accessor(index)
    }

    /// Scene node as raw JSON
    pub fn node(&self, index: usize) -> Result<&Value, AccessError> {
        self.config()?.node(index)
    }

    pub fn buffer_view(&self, index: usize) -> Result<&BufferView, AccessError> {
        self.config()?.buffer_view(index)
    }

    /// Buffer view behind an accessor
    pub fn buffer_view_for(&self, accessor: &Accessor) -> Result<&BufferView, AccessError> {
        resolver::accessor_buffer_view(self.config()?, accessor)
    }

    /// Segment behind an accessor
    pub fn segment_for(&self, accessor: &Accessor) -> Result<&Segment, AccessError> {
        resolver::accessor_segment(self.config()?, &self.segments, accessor)
    }

    /// Every element of an accessor
    pub fn resolve_accessor(&self, index: usize) -> Result<TypedView<'_>, AccessError> {
        self.resolve_range(index, 0, 0)
    }

    /// Elements `[offset, offset + count)` of an accessor; `count == 0` means
    /// all remaining elements
    pub fn resolve_range(
        &self,
        index: usize,
        offset: usize,
        count: usize,
    ) -> Result<TypedView<'_>, AccessError> {
        resolver::resolve_accessor(self.config()?, &self.segments, index, offset, count)
    }

    pub fn resolve_buffer_view(
        &self,
        view_index: usize,
        component: ComponentType,
    ) -> Result<TypedView<'_>, AccessError> {
        resolver::resolve_buffer_view(self.config()?, &self.segments, view_index, component)
    }

    pub fn buffer_view_bytes(&self, view_index: usize) -> Result<&[u8], AccessError> {
        resolver::buffer_view_bytes(self.config()?, &self.segments, view_index)
    }

    /// Resolve an accessor feeding a vertex attribute, checking that its
    /// element type fits the semantic
    pub fn resolve_attribute(
        &self,
        semantic: AttributeSemantic,
        index: usize,
    ) -> Result<TypedView<'_>, AccessError> {
        let accessor = self.accessor(index)?;
        let expected = semantic.required_element_type();
        let found = accessor.element()?;
        if found != expected {
            return Err(AccessError::AttributeTypeMismatch {
                semantic: semantic.to_string(),
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        self.resolve_accessor(index)
    }

    pub fn accessor_byte_length(&self, index: usize) -> Result<usize, AccessError> {
        resolver::accessor_byte_length(self.accessor(index)?)
    }

    pub fn accessor_byte_offset(&self, index: usize) -> Result<usize, AccessError> {
        let config = self.config()?;
        resolver::accessor_byte_offset(config, config.accessor(index)?)
    }

    pub fn element_stride(&self, index: usize) -> Result<usize, AccessError> {
        let config = self.config()?;
        resolver::element_stride(config, config.accessor(index)?)
    }

    /// Release segments and configuration.
    ///
    /// Returns `true` when this call released them and `false` if the asset
    /// was already disposed.
    pub fn dispose(&mut self) -> bool {
        if self.config.take().is_none() {
            return false;
        }
        self.segments.clear();
        tracing::debug!("Asset {:?} disposed", self.name);
        true
    }
}
