use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Viewer settings. All page content is inlined in the binary; this only
/// covers presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Skip scroll and reveal animations entirely.
    #[serde(default)]
    pub reduced_motion: bool,

    /// Command used to open project links (defaults to xdg-open).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,

    /// Section the viewer starts on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_section: Option<String>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("folio");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        let config = AppConfig::default();
        let _ = config.save();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            reduced_motion: true,
            browser: Some("firefox".to_string()),
            start_section: Some("projects".to_string()),
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.reduced_motion, deserialized.reduced_motion);
        assert_eq!(config.browser, deserialized.browser);
        assert_eq!(config.start_section, deserialized.start_section);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(!config.reduced_motion);
        assert!(config.browser.is_none());
        assert!(config.start_section.is_none());
    }
}
