//! Accessor resolution: accessor → buffer view → segment
//!
//! All three levels are plain indices into arenas owned by the caller
//! ([`Configuration`] and the segment list), so every hop is a bounds-checked
//! lookup. Views are contiguous; a declared `byteStride` is reported by
//! [`element_stride`] but never applied.
//!
//! Offset arithmetic for an accessor view:
//! ```text
//! start = segment.byte_offset
//!       + buffer_view.byte_offset
//!       + accessor.byte_offset
//!       + element_offset * components * width
//! len   = min(count - element_offset, element_count || count) * components
//! ```

use crate::container::Segment;
use crate::document::{Accessor, BufferView, Configuration};
use crate::error::{AccessError, IndexKind};
use crate::types::ComponentType;
use crate::view::TypedView;

/// Buffer view an accessor reads from (index 0 when omitted)
pub fn accessor_buffer_view<'c>(
    config: &'c Configuration,
    accessor: &Accessor,
) -> Result<&'c BufferView, AccessError> {
    config.buffer_view(accessor.buffer_view_index())
}

/// Segment an accessor reads from
pub fn accessor_segment<'s>(
    config: &Configuration,
    segments: &'s [Segment],
    accessor: &Accessor,
) -> Result<&'s Segment, AccessError> {
    let view = accessor_buffer_view(config, accessor)?;
    view_segment(segments, view)
}

/// Total packed byte length of an accessor: components × width × count
pub fn accessor_byte_length(accessor: &Accessor) -> Result<usize, AccessError> {
    mul(accessor.count, accessor.element_size()?)
}

/// Byte offset of an accessor within its segment (buffer view offset plus
/// accessor offset)
pub fn accessor_byte_offset(
    config: &Configuration,
    accessor: &Accessor,
) -> Result<usize, AccessError> {
    let view = accessor_buffer_view(config, accessor)?;
    add(view.offset(), accessor.offset())
}

/// Distance between consecutive elements: the declared `byteStride`, or the
/// packed element size when the view is tightly packed
pub fn element_stride(config: &Configuration, accessor: &Accessor) -> Result<usize, AccessError> {
    let view = accessor_buffer_view(config, accessor)?;
    match view.byte_stride {
        Some(stride) => Ok(stride),
        None => accessor.element_size(),
    }
}

/// Raw bytes of a buffer view
pub fn buffer_view_bytes<'s>(
    config: &Configuration,
    segments: &'s [Segment],
    view_index: usize,
) -> Result<&'s [u8], AccessError> {
    let view = config.buffer_view(view_index)?;
    let segment = view_segment(segments, view)?;
    let (start, end) = view_window(segment, view)?;
    Ok(&segment.backing()[start..end])
}

/// Whole buffer view reinterpreted as `component` values.
///
/// Covers `byte_length / width` components; a trailing partial component is
/// left out.
pub fn resolve_buffer_view<'s>(
    config: &Configuration,
    segments: &'s [Segment],
    view_index: usize,
    component: ComponentType,
) -> Result<TypedView<'s>, AccessError> {
    let view = config.buffer_view(view_index)?;
    let segment = view_segment(segments, view)?;
    let (start, _) = view_window(segment, view)?;

    let width = component.byte_width();
    let len = view.byte_length / width * width;
    if len == 0 {
        return Ok(TypedView::empty(component));
    }
    check_alignment(start, width)?;

    tracing::trace!(
        "bufferView {} as {}: {} components at byte {}",
        view_index,
        component,
        len / width,
        start
    );
    TypedView::cast(component, &segment.backing()[start..start + len], start)
}

/// Typed view of `accessor_index`, skipping `element_offset` elements and
/// keeping at most `element_count` (0 means "all remaining").
///
/// Running past the end of the accessor yields an empty view rather than an
/// error. Failures are per-call and never affect other accessors.
pub fn resolve_accessor<'s>(
    config: &Configuration,
    segments: &'s [Segment],
    accessor_index: usize,
    element_offset: usize,
    element_count: usize,
) -> Result<TypedView<'s>, AccessError> {
    let accessor = config.accessor(accessor_index)?;
    let view = accessor_buffer_view(config, accessor)?;
    let segment = view_segment(segments, view)?;
    let component = accessor.component()?;
    let components = accessor.element()?.component_count();
    let width = component.byte_width();

    let requested = if element_count == 0 {
        accessor.count
    } else {
        element_count
    };
    let effective = accessor.count.saturating_sub(element_offset).min(requested);
    if effective == 0 {
        return Ok(TypedView::empty(component));
    }

    let (view_start, _) = view_window(segment, view)?;
    let element_size = components * width;
    let skip = mul(element_offset, element_size)?;
    let rel_start = add(accessor.offset(), skip)?;
    let len = mul(effective, element_size)?;
    let rel_end = add(rel_start, len)?;
    if rel_end > view.byte_length {
        return Err(AccessError::ByteRangeOutOfBounds {
            start: rel_start,
            end: rel_end,
            limit: view.byte_length,
        });
    }

    let start = view_start + rel_start;
    check_alignment(start, width)?;

    tracing::trace!(
        "accessor {}: {} x {} {} at byte {}",
        accessor_index,
        effective,
        accessor.type_,
        component,
        start
    );
    TypedView::cast(component, &segment.backing()[start..start + len], start)
}

/// Segment behind a buffer view
fn view_segment<'s>(segments: &'s [Segment], view: &BufferView) -> Result<&'s Segment, AccessError> {
    segments
        .get(view.buffer)
        .ok_or(AccessError::IndexOutOfRange {
            kind: IndexKind::Buffer,
            index: view.buffer,
            len: segments.len(),
        })
}

/// Absolute `[start, end)` of a buffer view inside the segment's backing
/// storage, checked against the segment bounds
fn view_window(segment: &Segment, view: &BufferView) -> Result<(usize, usize), AccessError> {
    let limit = segment.byte_length();
    let end = add(view.offset(), view.byte_length)?;
    if end > limit {
        return Err(AccessError::ByteRangeOutOfBounds {
            start: view.offset(),
            end,
            limit,
        });
    }
    let base = segment.byte_offset();
    Ok((base + view.offset(), base + end))
}

fn check_alignment(offset: usize, width: usize) -> Result<(), AccessError> {
    if offset % width != 0 {
        return Err(AccessError::MisalignedOffset { offset, width });
    }
    Ok(())
}

fn add(lhs: usize, rhs: usize) -> Result<usize, AccessError> {
    lhs.checked_add(rhs)
        .ok_or(AccessError::ArithmeticOverflow { lhs, rhs })
}

fn mul(lhs: usize, rhs: usize) -> Result<usize, AccessError> {
    lhs.checked_mul(rhs)
        .ok_or(AccessError::ArithmeticOverflow { lhs, rhs })
}
