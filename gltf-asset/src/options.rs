//! Decode policy configuration
//!
//! GLB readers in the wild disagree on how strict to be about a few
//! structural irregularities. The defaults here are lenient; [`DecodeOptions::strict`]
//! turns every tolerated irregularity into an error.

use serde::{Deserialize, Serialize};

/// What to do with a chunk whose length is not a multiple of 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChunkAlignmentPolicy {
    /// Log a warning and keep walking
    #[default]
    Warn,
    /// Fail with `DecodeError::MisalignedChunkLength`
    Reject,
}

/// What to do when a second JSON chunk appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateJsonPolicy {
    /// Last JSON chunk wins (logged as a warning)
    #[default]
    Overwrite,
    /// Fail with `DecodeError::DuplicateJsonChunk`
    Reject,
}

/// Options for [`decode_with`](crate::decode_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DecodeOptions {
    #[serde(default)]
    pub chunk_alignment: ChunkAlignmentPolicy,
    #[serde(default)]
    pub duplicate_json: DuplicateJsonPolicy,
}

impl DecodeOptions {
    /// Reject every irregularity the default options tolerate
    pub const fn strict() -> Self {
        Self {
            chunk_alignment: ChunkAlignmentPolicy::Reject,
            duplicate_json: DuplicateJsonPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_lenient() {
        let options = DecodeOptions::default();
        assert_eq!(options.chunk_alignment, ChunkAlignmentPolicy::Warn);
        assert_eq!(options.duplicate_json, DuplicateJsonPolicy::Overwrite);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: DecodeOptions =
            serde_json::from_str(r#"{ "duplicate_json": "reject" }"#).unwrap();
        assert_eq!(options.chunk_alignment, ChunkAlignmentPolicy::Warn);
        assert_eq!(options.duplicate_json, DuplicateJsonPolicy::Reject);
    }
}
