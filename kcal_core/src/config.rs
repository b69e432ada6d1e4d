//! Configuration file support for kcal.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/kcal/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub targets: TargetsConfig,
}

/// Calorie-target adjustment configuration
///
/// The weight-loss and weight-gain targets are the maintenance calories
/// minus/plus these adjustments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_deficit_kcal")]
    pub deficit_kcal: f64,

    #[serde(default = "default_surplus_kcal")]
    pub surplus_kcal: f64,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: default_deficit_kcal(),
            surplus_kcal: default_surplus_kcal(),
        }
    }
}

// Default value functions
fn default_deficit_kcal() -> f64 {
    500.0
}

fn default_surplus_kcal() -> f64 {
    500.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("kcal").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.targets.deficit_kcal, 500.0);
        assert_eq!(config.targets.surplus_kcal, 500.0);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[targets]
deficit_kcal = 300.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.targets.deficit_kcal, 300.0);
        assert_eq!(config.targets.surplus_kcal, 500.0); // default
    }

    #[test]
    fn test_save_and_load_from_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            targets: TargetsConfig {
                deficit_kcal: 400.0,
                surplus_kcal: 250.0,
            },
        };

        config.save_to(&config_path).unwrap();
        let loaded = Config::load_from(&config_path).unwrap();

        assert_eq!(loaded.targets.deficit_kcal, 400.0);
        assert_eq!(loaded.targets.surplus_kcal, 250.0);
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "targets = 'not a table'").unwrap();

        assert!(Config::load_from(&config_path).is_err());
    }
}
