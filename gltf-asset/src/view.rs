//! Typed read-only views over segment bytes
//!
//! A [`TypedView`] borrows from the asset that owns the segment, so no view
//! can outlive a disposal. Storage is assumed little-endian (the glTF byte
//! order), which holds on every target this crate is used on.

use crate::error::AccessError;
use crate::types::ComponentType;

/// Contiguous slice of components, tagged by component type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedView<'a> {
    I8(&'a [i8]),
    U8(&'a [u8]),
    I16(&'a [i16]),
    U16(&'a [u16]),
    I32(&'a [i32]),
    U32(&'a [u32]),
    F32(&'a [f32]),
}

impl<'a> TypedView<'a> {
    /// Reinterpret `bytes` as components of `component`.
    ///
    /// `offset` is the absolute byte offset of `bytes` inside its backing
    /// storage; it is only used for the error report.
    pub(crate) fn cast(
        component: ComponentType,
        bytes: &'a [u8],
        offset: usize,
    ) -> Result<Self, AccessError> {
        let misaligned = |_| AccessError::MisalignedOffset {
            offset,
            width: component.byte_width(),
        };
        let view = match component {
            ComponentType::Byte => TypedView::I8(bytemuck::try_cast_slice(bytes).map_err(misaligned)?),
            ComponentType::UnsignedByte => TypedView::U8(bytes),
            ComponentType::Short => TypedView::I16(bytemuck::try_cast_slice(bytes).map_err(misaligned)?),
            ComponentType::UnsignedShort => {
                TypedView::U16(bytemuck::try_cast_slice(bytes).map_err(misaligned)?)
            }
            ComponentType::Int => TypedView::I32(bytemuck::try_cast_slice(bytes).map_err(misaligned)?),
            ComponentType::UnsignedInt => {
                TypedView::U32(bytemuck::try_cast_slice(bytes).map_err(misaligned)?)
            }
            ComponentType::Float => TypedView::F32(bytemuck::try_cast_slice(bytes).map_err(misaligned)?),
        };
        Ok(view)
    }

    /// Zero-length view of the given type
    pub fn empty(component: ComponentType) -> Self {
        match component {
            ComponentType::Byte => TypedView::I8(&[]),
            ComponentType::UnsignedByte => TypedView::U8(&[]),
            ComponentType::Short => TypedView::I16(&[]),
            ComponentType::UnsignedShort => TypedView::U16(&[]),
            ComponentType::Int => TypedView::I32(&[]),
            ComponentType::UnsignedInt => TypedView::U32(&[]),
            ComponentType::Float => TypedView::F32(&[]),
        }
    }

    pub fn component_type(&self) -> ComponentType {
        match self {
            TypedView::I8(_) => ComponentType::Byte,
            TypedView::U8(_) => ComponentType::UnsignedByte,
            TypedView::I16(_) => ComponentType::Short,
            TypedView::U16(_) => ComponentType::UnsignedShort,
            TypedView::I32(_) => ComponentType::Int,
            TypedView::U32(_) => ComponentType::UnsignedInt,
            TypedView::F32(_) => ComponentType::Float,
        }
    }

    /// Number of components (not elements)
    pub fn len(&self) -> usize {
        match self {
            TypedView::I8(s) => s.len(),
            TypedView::U8(s) => s.len(),
            TypedView::I16(s) => s.len(),
            TypedView::U16(s) => s.len(),
            TypedView::I32(s) => s.len(),
            TypedView::U32(s) => s.len(),
            TypedView::F32(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn byte_len(&self) -> usize {
        self.len() * self.component_type().byte_width()
    }

    /// The underlying bytes, ready for a GPU upload
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            TypedView::I8(s) => bytemuck::cast_slice(s),
            TypedView::U8(s) => s,
            TypedView::I16(s) => bytemuck::cast_slice(s),
            TypedView::U16(s) => bytemuck::cast_slice(s),
            TypedView::I32(s) => bytemuck::cast_slice(s),
            TypedView::U32(s) => bytemuck::cast_slice(s),
            TypedView::F32(s) => bytemuck::cast_slice(s),
        }
    }

    pub fn as_f32(&self) -> Option<&'a [f32]> {
        match *self {
            TypedView::F32(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> Option<&'a [u8]> {
        match *self {
            TypedView::U8(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<&'a [u16]> {
        match *self {
            TypedView::U16(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<&'a [u32]> {
        match *self {
            TypedView::U32(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<&'a [i8]> {
        match *self {
            TypedView::I8(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<&'a [i16]> {
        match *self {
            TypedView::I16(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<&'a [i32]> {
        match *self {
            TypedView::I32(s) => Some(s),
            _ => None,
        }
    }

    /// Copy out every component widened to f32 (no normalization)
    pub fn to_f32_vec(&self) -> Vec<f32> {
        match *self {
            TypedView::I8(s) => s.iter().map(|&v| v as f32).collect(),
            TypedView::U8(s) => s.iter().map(|&v| v as f32).collect(),
            TypedView::I16(s) => s.iter().map(|&v| v as f32).collect(),
            TypedView::U16(s) => s.iter().map(|&v| v as f32).collect(),
            TypedView::I32(s) => s.iter().map(|&v| v as f32).collect(),
            TypedView::U32(s) => s.iter().map(|&v| v as f32).collect(),
            TypedView::F32(s) => s.to_vec(),
        }
    }

    /// Copy out unsigned components as u32 (index buffers). `None` for
    /// signed and float views.
    pub fn to_u32_vec(&self) -> Option<Vec<u32>> {
        match *self {
            TypedView::U8(s) => Some(s.iter().map(|&v| v as u32).collect()),
            TypedView::U16(s) => Some(s.iter().map(|&v| v as u32).collect()),
            TypedView::U32(s) => Some(s.to_vec()),
            _ => None,
        }
    }
}
