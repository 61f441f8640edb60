//! Human-readable summaries of an asset

use std::fmt::{Display, Write};

use anyhow::Result;
use gltf_asset::{Asset, TypedView};

/// Components shown per accessor in the summary
const PREVIEW_COMPONENTS: usize = 8;

/// Buffers, buffer views and accessors of an asset
pub fn info(asset: &Asset) -> Result<String> {
    let config = asset.config()?;
    let mut out = String::new();

    writeln!(
        out,
        "{} (glTF {})",
        asset.name(),
        config.asset_version().unwrap_or("?")
    )?;

    writeln!(out, "Buffers: {}", config.buffers.len())?;
    for (i, buffer) in config.buffers.iter().enumerate() {
        let segment = asset.segments().get(i).map_or(0, |s| s.byte_length());
        write!(out, "  [{}] {} bytes (segment {} bytes)", i, buffer.byte_length, segment)?;
        if let Some(uri) = &buffer.uri {
            write!(out, " uri={}", uri)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Buffer views: {}", config.buffer_views.len())?;
    for (i, view) in config.buffer_views.iter().enumerate() {
        write!(
            out,
            "  [{}] buffer {}, offset {}, length {}",
            i,
            view.buffer,
            view.offset(),
            view.byte_length
        )?;
        if let Some(stride) = view.byte_stride {
            write!(out, ", stride {}", stride)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Accessors: {}", config.accessors.len())?;
    for (i, accessor) in config.accessors.iter().enumerate() {
        write!(
            out,
            "  [{}] {} {} x{}",
            i, accessor.type_, accessor.component_type, accessor.count
        )?;
        if let Some(name) = &accessor.name {
            write!(out, " '{}'", name)?;
        }

        let layout = asset
            .accessor_byte_offset(i)
            .and_then(|offset| Ok((offset, asset.accessor_byte_length(i)?)));
        match (layout, asset.resolve_accessor(i)) {
            (Ok((offset, length)), Ok(view)) => writeln!(
                out,
                " @ byte {} ({} bytes): {}",
                offset,
                length,
                preview(&view, PREVIEW_COMPONENTS)
            )?,
            (Err(e), _) | (_, Err(e)) => writeln!(out, ": error: {}", e)?,
        }
    }

    Ok(out)
}

/// Components of one accessor, one element per line
pub fn accessor(asset: &Asset, index: usize, offset: usize, count: usize) -> Result<String> {
    let acc = asset.accessor(index)?;
    let components = acc.element()?.component_count();
    let view = asset.resolve_range(index, offset, count)?;

    let mut out = String::new();
    writeln!(
        out,
        "accessor {}: {} {}, elements {}..{} of {}",
        index,
        acc.element()?,
        view.component_type(),
        offset.min(acc.count),
        offset.min(acc.count) + view.len() / components,
        acc.count
    )?;

    let values = view.to_f32_vec();
    for (i, element) in values.chunks(components).enumerate() {
        let text = element
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "  {}: [{}]", offset + i, text)?;
    }

    Ok(out)
}

fn preview(view: &TypedView<'_>, limit: usize) -> String {
    match *view {
        TypedView::I8(s) => join(s, limit),
        TypedView::U8(s) => join(s, limit),
        TypedView::I16(s) => join(s, limit),
        TypedView::U16(s) => join(s, limit),
        TypedView::I32(s) => join(s, limit),
        TypedView::U32(s) => join(s, limit),
        TypedView::F32(s) => join(s, limit),
    }
}

fn join<T: Display>(values: &[T], limit: usize) -> String {
    let mut text = values
        .iter()
        .take(limit)
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if values.len() > limit {
        text.push_str(", ...");
    }
    format!("[{}]", text)
}
