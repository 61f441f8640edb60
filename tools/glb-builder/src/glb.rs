//! GLB container assembly
//!
//! [`GlbWriter`] writes well-formed containers by default and lets tests
//! override the header words or append arbitrary chunks to produce malformed
//! ones.

use crate::utils::{align_buffer, pad_to_four};
use gltf_json as json;

pub const GLB_MAGIC: u32 = 0x4654_6C67;
pub const CHUNK_JSON: u32 = 0x4E4F_534A;
pub const CHUNK_BIN: u32 = 0x004E_4942;

/// Chunk-by-chunk GLB writer
pub struct GlbWriter {
    magic: u32,
    version: u32,
    declared_length: Option<u32>,
    chunks: Vec<(u32, Vec<u8>)>,
}

impl GlbWriter {
    pub fn new() -> Self {
        Self {
            magic: GLB_MAGIC,
            version: 2,
            declared_length: None,
            chunks: Vec::new(),
        }
    }

    pub fn magic(mut self, magic: u32) -> Self {
        self.magic = magic;
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Override the total length word (defaults to the real length)
    pub fn declared_length(mut self, length: u32) -> Self {
        self.declared_length = Some(length);
        self
    }

    /// Serialize a root into a space-padded JSON chunk
    pub fn json_chunk(self, root: &json::Root) -> anyhow::Result<Self> {
        let text = json::serialize::to_string(root)?;
        Ok(self.json_text(&text))
    }

    /// Raw JSON text as a space-padded JSON chunk
    pub fn json_text(mut self, text: &str) -> Self {
        let mut payload = text.as_bytes().to_vec();
        pad_to_four(&mut payload, b' ');
        self.chunks.push((CHUNK_JSON, payload));
        self
    }

    /// Zero-padded BIN chunk
    pub fn bin_chunk(mut self, data: &[u8]) -> Self {
        let mut payload = data.to_vec();
        align_buffer(&mut payload);
        self.chunks.push((CHUNK_BIN, payload));
        self
    }

    /// Chunk written exactly as given, with no padding
    pub fn raw_chunk(mut self, chunk_type: u32, payload: &[u8]) -> Self {
        self.chunks.push((chunk_type, payload.to_vec()));
        self
    }

    pub fn finish(self) -> Vec<u8> {
        let total_length = 12 + self
            .chunks
            .iter()
            .map(|(_, payload)| 8 + payload.len())
            .sum::<usize>();

        let mut glb = Vec::with_capacity(total_length);
        glb.extend_from_slice(&self.magic.to_le_bytes());
        glb.extend_from_slice(&self.version.to_le_bytes());
        let length = self.declared_length.unwrap_or(total_length as u32);
        glb.extend_from_slice(&length.to_le_bytes());

        for (chunk_type, payload) in &self.chunks {
            glb.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            glb.extend_from_slice(&chunk_type.to_le_bytes());
            glb.extend_from_slice(payload);
        }

        glb
    }
}

impl Default for GlbWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble a GLB from a root and one BIN chunk per buffer.
///
/// Buffers that the root references by URI are skipped.
pub fn assemble_glb(root: &json::Root, buffers: &[Vec<u8>]) -> anyhow::Result<Vec<u8>> {
    let mut writer = GlbWriter::new().json_chunk(root)?;
    for (index, data) in buffers.iter().enumerate() {
        let external = root.buffers.get(index).is_some_and(|b| b.uri.is_some());
        if !external {
            writer = writer.bin_chunk(data);
        }
    }
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_container_layout() {
        let glb = GlbWriter::new().json_text("{}").bin_chunk(&[1, 2, 3]).finish();

        // header 12 + json 8+4 + bin 8+4
        assert_eq!(glb.len(), 36);
        assert_eq!(&glb[0..4], b"glTF");
        assert_eq!(u32::from_le_bytes(glb[8..12].try_into().unwrap()), 36);
        assert_eq!(&glb[16..20], b"JSON");
        assert_eq!(&glb[20..24], b"{}  ");
        assert_eq!(&glb[28..32], b"BIN\0");
        assert_eq!(&glb[32..36], &[1, 2, 3, 0]);
    }

    #[test]
    fn test_header_overrides() {
        let glb = GlbWriter::new()
            .magic(0x1234_5678)
            .version(1)
            .declared_length(99)
            .finish();
        assert_eq!(glb.len(), 12);
        assert_eq!(u32::from_le_bytes(glb[0..4].try_into().unwrap()), 0x1234_5678);
        assert_eq!(u32::from_le_bytes(glb[4..8].try_into().unwrap()), 1);
        assert_eq!(u32::from_le_bytes(glb[8..12].try_into().unwrap()), 99);
    }

    #[test]
    fn test_raw_chunk_unpadded() {
        let glb = GlbWriter::new().raw_chunk(CHUNK_BIN, &[7; 5]).finish();
        assert_eq!(glb.len(), 12 + 8 + 5);
        assert_eq!(u32::from_le_bytes(glb[12..16].try_into().unwrap()), 5);
    }
}
