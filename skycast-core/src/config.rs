use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::units::TemperatureUnit;

/// User preferences stored on disk. Every field is optional; the CLI falls
/// back to its built-in defaults (fahrenheit, 4 hours) for anything unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// unit = "celsius"
    pub unit: Option<TemperatureUnit>,

    /// Default forecast window in hours.
    pub hours: Option<u32>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_leaves_everything_unset() {
        let cfg = Config::default();
        assert!(cfg.unit.is_none());
        assert!(cfg.hours.is_none());
    }

    #[test]
    fn parses_unit_and_hours_from_toml() {
        let cfg: Config = toml::from_str("unit = \"celsius\"\nhours = 12\n").unwrap();
        assert_eq!(cfg.unit, Some(TemperatureUnit::Celsius));
        assert_eq!(cfg.hours, Some(12));
    }

    #[test]
    fn toml_roundtrip_preserves_preferences() {
        let cfg = Config { unit: Some(TemperatureUnit::Fahrenheit), hours: Some(24) };

        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.unit, Some(TemperatureUnit::Fahrenheit));
        assert_eq!(parsed.hours, Some(24));
    }
}
