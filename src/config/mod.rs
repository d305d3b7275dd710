//! Application Configuration
//!
//! User settings and preferences stored in TOML format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::vision::{MatchStrategy, ReaderConfig};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Glyph recognition settings
    pub recognition: RecognitionSettings,
    /// Alert settings
    pub alert: AlertSettings,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Glyph recognition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionSettings {
    /// Matching strategy
    pub strategy: MatchStrategy,
    /// Catalog variant to use instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Reject catalogs that could match ambiguously
    pub validate_catalog: bool,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::LongestMatch,
            catalog_path: None,
            validate_catalog: true,
        }
    }
}

impl RecognitionSettings {
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            strategy: self.strategy,
            validate_catalog: self.validate_catalog,
        }
    }
}

/// Alert settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    /// Place named in status messages
    pub city: String,
    /// Appended to alert statuses
    pub hashtags: String,
    /// Number of sensors averaged
    pub max_sensors: usize,
    /// Measurement the alert is based on
    pub measurement: String,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            city: "Kraków".to_string(),
            hashtags: "#SMOG #KRAKÓW #KrakówSmog".to_string(),
            max_sensors: 3,
            measurement: "pm2.5".to_string(),
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid configuration in {:?}", path))?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();

        assert_eq!(config.general.log_level, "info");

        assert_eq!(config.recognition.strategy, MatchStrategy::LongestMatch);
        assert!(config.recognition.catalog_path.is_none());
        assert!(config.recognition.validate_catalog);

        assert_eq!(config.alert.city, "Kraków");
        assert_eq!(config.alert.max_sensors, 3);
        assert_eq!(config.alert.measurement, "pm2.5");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = AppConfig::default();
        config.recognition.strategy = MatchStrategy::Substitution;
        config.recognition.catalog_path = Some(PathBuf::from("/etc/smogwatch/font.toml"));
        config.alert.max_sensors = 5;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.recognition.strategy, MatchStrategy::Substitution);
        assert_eq!(parsed.recognition.catalog_path, config.recognition.catalog_path);
        assert_eq!(parsed.alert.max_sensors, 5);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str("[recognition]\nstrategy = \"substitution\"\n").unwrap();
        assert_eq!(parsed.recognition.strategy, MatchStrategy::Substitution);
        assert!(parsed.recognition.validate_catalog);
        assert_eq!(parsed.alert.city, "Kraków");
    }

    #[test]
    fn test_reader_config() {
        let settings = RecognitionSettings {
            strategy: MatchStrategy::Substitution,
            catalog_path: None,
            validate_catalog: false,
        };
        let reader = settings.reader_config();
        assert_eq!(reader.strategy, MatchStrategy::Substitution);
        assert!(!reader.validate_catalog);
    }

    #[test]
    fn test_save_and_load_config() {
        let config = AppConfig::default();
        let temp_file = NamedTempFile::new().unwrap();

        save_config(&config, temp_file.path()).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(config.alert.hashtags, loaded.alert.hashtags);
        assert_eq!(config.recognition.strategy, loaded.recognition.strategy);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not valid toml {{{{").unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}
