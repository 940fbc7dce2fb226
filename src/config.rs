use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::content::MIN_ITEMS;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_api_model")]
    pub api_model: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_items")]
    pub request_items: usize,
    #[serde(default)]
    pub offline: bool,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_api_model() -> String {
    "gemini-3-flash-preview".to_string()
}
fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_request_items() -> usize {
    MIN_ITEMS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            api_model: default_api_model(),
            api_base_url: default_api_base_url(),
            request_items: default_request_items(),
            offline: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kallkoll")
            .join("config.toml")
    }

    /// Clamp values that would break the session contract. Call after
    /// deserialization to handle hand-edited configs.
    pub fn validate(&mut self) {
        self.request_items = self.request_items.clamp(MIN_ITEMS, 12);
        if self.api_model.trim().is_empty() {
            self.api_model = default_api_model();
        }
        if self.api_base_url.trim().is_empty() {
            self.api_base_url = default_api_base_url();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.request_items, MIN_ITEMS);
        assert!(!config.offline);
    }

    #[test]
    fn test_validate_clamps_item_count() {
        let mut config = Config::default();
        config.request_items = 1;
        config.validate();
        assert_eq!(config.request_items, MIN_ITEMS);

        config.request_items = 999;
        config.validate();
        assert_eq!(config.request_items, 12);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("offline = true\n").unwrap();
        assert!(config.offline);
        assert_eq!(config.api_model, default_api_model());
    }
}
