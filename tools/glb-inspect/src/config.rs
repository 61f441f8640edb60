//! Inspector configuration (TOML)

use std::path::Path;

use anyhow::{Context, Result};
use gltf_asset::DecodeOptions;
use serde::{Deserialize, Serialize};

/// Contents of the `--config` file.
///
/// ```toml
/// [decode]
/// chunk_alignment = "reject"
/// duplicate_json = "overwrite"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InspectConfig {
    #[serde(default)]
    pub decode: DecodeOptions,
}

impl InspectConfig {
    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gltf_asset::{ChunkAlignmentPolicy, DuplicateJsonPolicy};
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_defaults() {
        let config: InspectConfig = toml::from_str("").unwrap();
        assert_eq!(config, InspectConfig::default());
        assert_eq!(config.decode.chunk_alignment, ChunkAlignmentPolicy::Warn);
        assert_eq!(config.decode.duplicate_json, DuplicateJsonPolicy::Overwrite);
    }

    #[test]
    fn test_partial_decode_table() {
        let config: InspectConfig = toml::from_str(
            r#"
            [decode]
            duplicate_json = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(config.decode.chunk_alignment, ChunkAlignmentPolicy::Warn);
        assert_eq!(config.decode.duplicate_json, DuplicateJsonPolicy::Reject);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inspect.toml");
        std::fs::write(
            &path,
            "[decode]\nchunk_alignment = \"reject\"\nduplicate_json = \"reject\"\n",
        )
        .unwrap();

        let config = InspectConfig::load(&path).unwrap();
        assert_eq!(config.decode, DecodeOptions::strict());
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempdir().unwrap();
        let config = InspectConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, InspectConfig::default());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[decode]\nchunk_alignment = \"sometimes\"\n").unwrap();
        assert!(InspectConfig::load(&path).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = InspectConfig {
            decode: DecodeOptions::strict(),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: InspectConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
