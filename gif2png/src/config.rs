use std::fs;
use std::path::PathBuf;

use crate::image::PngCompression;

/// Directory scanned when nothing else is given.
pub const DEFAULT_DIRECTORY: &str = "public";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub directory: PathBuf,
    pub compression: PngCompression,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            compression: PngCompression::Default,
        }
    }
}

impl ConvertConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    pub fn load() -> Option<Self> {
        let config_path = Self::config_path()?;

        fs::read_to_string(&config_path)
            .ok()
            .and_then(|contents| Self::from_json(&contents))
    }

    pub fn save(&self) -> Option<()> {
        let config_path = Self::config_path()?;

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).ok()?;
        }

        serde_json::to_string_pretty(self)
            .ok()
            .and_then(|json| fs::write(&config_path, json).ok())
    }

    fn from_json(contents: &str) -> Option<Self> {
        serde_json::from_str(contents)
            .map_err(|e| log::warn!("Ignoring malformed config: {}", e))
            .ok()
    }

    fn config_path() -> Option<PathBuf> {
        #[allow(deprecated)]
        let home = std::env::home_dir()?;
        Some(home.join(".config").join("gif2png").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_public() {
        let config = ConvertConfig::default();
        assert_eq!(config.directory, PathBuf::from("public"));
        assert_eq!(config.compression, PngCompression::Default);
    }

    #[test]
    fn missing_fields_fall_back() {
        let config = ConvertConfig::from_json(r#"{ "compression": "best" }"#).unwrap();
        assert_eq!(config.directory, PathBuf::from(DEFAULT_DIRECTORY));
        assert_eq!(config.compression, PngCompression::Best);
    }

    #[test]
    fn json_round_trip() {
        let config = ConvertConfig {
            directory: PathBuf::from("assets/img"),
            compression: PngCompression::Fast,
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(ConvertConfig::from_json(&json), Some(config));
    }

    #[test]
    fn malformed_json_is_ignored() {
        assert_eq!(ConvertConfig::from_json("{ not json"), None);
        assert_eq!(ConvertConfig::from_json(r#"{ "compression": "max" }"#), None);
    }
}
