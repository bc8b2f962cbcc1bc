use crate::error::{FormatterError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Leading frames that belong to the redirect hook's own call chain
pub const DEFAULT_SKIP_FRAMES: usize = 4;

/// Configuration for trace layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Leading frames to drop when the stack is deep enough
    pub skip_frames: usize,

    /// Width of the file column; longer paths are truncated from the left
    pub file_width: usize,

    /// Width of the right-aligned line number column
    pub line_width: usize,

    /// Prefix marking a truncated file path
    pub truncation_marker: String,

    /// Zero-padded width of the sequence key
    pub key_width: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            skip_frames: DEFAULT_SKIP_FRAMES,
            file_width: 80,
            line_width: 5,
            truncation_marker: "...".to_string(),
            key_width: 2,
        }
    }
}

impl FormatterConfig {
    /// Three-digit keys, for stacks deeper than 99 frames
    pub fn wide_keys() -> Self {
        Self {
            key_width: 3,
            ..Default::default()
        }
    }

    /// Report every frame, including the hook's own
    pub fn no_skip() -> Self {
        Self {
            skip_frames: 0,
            ..Default::default()
        }
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate().map_err(FormatterError::invalid_config)?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.file_width == 0 {
            return Err("file_width must be > 0".to_string());
        }

        if self.key_width == 0 {
            return Err("key_width must be > 0".to_string());
        }

        let marker_len = self.truncation_marker.chars().count();
        if marker_len >= self.file_width {
            return Err(format!(
                "truncation_marker length ({}) must be smaller than file_width ({})",
                marker_len, self.file_width
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FormatterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.skip_frames, 4);
        assert_eq!(config.file_width, 80);
        assert_eq!(config.line_width, 5);
        assert_eq!(config.key_width, 2);
    }

    #[test]
    fn test_preset_configs_valid() {
        assert!(FormatterConfig::wide_keys().validate().is_ok());
        assert!(FormatterConfig::no_skip().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = FormatterConfig {
            file_width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.file_width = 3;
        assert!(config.validate().is_err(), "marker must leave room");

        config.file_width = 4;
        assert!(config.validate().is_ok());

        config.key_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FormatterConfig::from_toml_str("skip_frames = 2\nkey_width = 3\n").unwrap();
        assert_eq!(config.skip_frames, 2);
        assert_eq!(config.key_width, 3);
        assert_eq!(config.file_width, 80);
        assert_eq!(config.truncation_marker, "...");
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = FormatterConfig::from_toml_str("file_width = \"wide\"").unwrap_err();
        assert!(matches!(err, FormatterError::ConfigParse(_)));

        let err = FormatterConfig::from_toml_str("file_width = 2").unwrap_err();
        assert!(matches!(err, FormatterError::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.toml");
        std::fs::write(&path, "file_width = 40\ntruncation_marker = \"~\"\n").unwrap();

        let config = FormatterConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.file_width, 40);
        assert_eq!(config.truncation_marker, "~");

        let missing = FormatterConfig::from_toml_file(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(FormatterError::Io(_))));
    }
}
