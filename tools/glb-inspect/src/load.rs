//! Asset loading from disk

use std::path::Path;

use anyhow::{Context, Result, bail};
use gltf_asset::{Asset, Configuration, DecodeOptions, Segment};

/// Load a `.glb` container, or a `.gltf` document with external buffers
/// resolved relative to the document.
pub fn load_asset(path: &Path, options: &DecodeOptions) -> Result<Asset> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("asset")
        .to_string();

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;

    match ext.as_str() {
        "glb" => Asset::from_glb_with(name, bytes, options)
            .with_context(|| format!("Failed to decode GLB {:?}", path)),
        "gltf" => {
            let config = Configuration::from_slice(&bytes)
                .with_context(|| format!("Failed to parse glTF JSON {:?}", path))?;
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            let segments = load_external_buffers(&config, base)?;
            Asset::from_parts(name, config, segments)
                .with_context(|| format!("Failed to assemble {:?}", path))
        }
        _ => bail!("Unsupported file: {:?} (use .glb or .gltf)", path),
    }
}

fn load_external_buffers(config: &Configuration, base: &Path) -> Result<Vec<Segment>> {
    config
        .buffers
        .iter()
        .enumerate()
        .map(|(index, buffer)| -> Result<Segment> {
            let Some(uri) = buffer.uri.as_deref() else {
                bail!("Buffer {} has no uri (only GLB containers embed buffers)", index);
            };
            if uri.starts_with("data:") {
                bail!("Buffer {}: data URIs are not supported", index);
            }

            let path = base.join(uri);
            let data =
                std::fs::read(&path).with_context(|| format!("Failed to read buffer {:?}", path))?;
            if data.len() < buffer.byte_length {
                bail!(
                    "Buffer {} ({:?}) is {} bytes, byteLength declares {}",
                    index,
                    path,
                    data.len(),
                    buffer.byte_length
                );
            }
            tracing::debug!("Loaded buffer {} from {:?} ({} bytes)", index, path, data.len());
            Ok(Segment::new(data))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glb_builder::{BufferBuilder, GltfBuilder, assemble_glb, json};
    use tempfile::tempdir;

    fn triangle_buffer() -> BufferBuilder {
        let mut buffer = BufferBuilder::new();
        buffer.pack_positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]]);
        buffer.pack_indices_u16(&[0, 1, 2]);
        buffer
    }

    #[test]
    fn test_load_glb() {
        let buffer = triangle_buffer();
        let root = GltfBuilder::new().build(&buffer, "test");
        let glb = assemble_glb(&root, buffer.buffers()).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("triangle.glb");
        std::fs::write(&path, glb).unwrap();

        let asset = load_asset(&path, &DecodeOptions::default()).unwrap();
        assert_eq!(asset.name(), "triangle");
        assert_eq!(asset.resolve_accessor(1).unwrap().as_u16().unwrap(), &[0, 1, 2]);
    }

    #[test]
    fn test_load_gltf_with_external_buffer() {
        let buffer = triangle_buffer();
        let root = GltfBuilder::new()
            .buffer_uri(0, "triangle.bin")
            .build(&buffer, "test");

        let dir = tempdir().unwrap();
        let path = dir.path().join("triangle.gltf");
        std::fs::write(&path, json::serialize::to_string(&root).unwrap()).unwrap();
        std::fs::write(dir.path().join("triangle.bin"), &buffer.buffers()[0]).unwrap();

        let asset = load_asset(&path, &DecodeOptions::default()).unwrap();
        assert_eq!(asset.segments().len(), 1);
        assert_eq!(asset.resolve_accessor(0).unwrap().len(), 9);
    }

    #[test]
    fn test_data_uri_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inline.gltf");
        std::fs::write(
            &path,
            r#"{"buffers":[{"byteLength":4,"uri":"data:application/octet-stream;base64,AAAAAA=="}]}"#,
        )
        .unwrap();

        let err = load_asset(&path, &DecodeOptions::default()).unwrap_err();
        assert!(err.to_string().contains("data URIs"), "{err}");
    }

    #[test]
    fn test_short_external_buffer_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.gltf");
        std::fs::write(&path, r#"{"buffers":[{"byteLength":16,"uri":"short.bin"}]}"#).unwrap();
        std::fs::write(dir.path().join("short.bin"), [0u8; 4]).unwrap();

        assert!(load_asset(&path, &DecodeOptions::default()).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mesh.obj");
        std::fs::write(&path, "v 0 0 0").unwrap();
        assert!(load_asset(&path, &DecodeOptions::default()).is_err());
    }

    #[test]
    fn test_strict_options_applied() {
        let glb = glb_builder::GlbWriter::new()
            .json_text("{}")
            .json_text("{}")
            .finish();
        let dir = tempdir().unwrap();
        let path = dir.path().join("dup.glb");
        std::fs::write(&path, glb).unwrap();

        assert!(load_asset(&path, &DecodeOptions::default()).is_ok());
        assert!(load_asset(&path, &DecodeOptions::strict()).is_err());
    }
}
