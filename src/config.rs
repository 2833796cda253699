use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default placeholder generator used when a catalog photo fails to load
pub const DEFAULT_PLACEHOLDER_BASE_URL: &str = "https://placehold.co/600x400";

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_placeholder_base_url() -> String {
    DEFAULT_PLACEHOLDER_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Event polling timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Base URL of the placeholder image generator
    #[serde(default = "default_placeholder_base_url")]
    pub placeholder_base_url: String,
    /// Show the store dialog right after startup
    #[serde(default)]
    pub open_store_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            placeholder_base_url: default_placeholder_base_url(),
            open_store_on_start: false,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".tienda-solidaria"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config from disk
    ///
    /// Returns `None` when no config file exists yet.
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        match fs::read_to_string(&config_path) {
            Ok(contents) => Some(Self::parse(&contents)),
            Err(e) => {
                log::warn!("Could not read {}: {}", config_path.display(), e);
                Some(Config::default())
            }
        }
    }

    /// Load the config, writing the defaults to disk on first run
    pub fn load_or_init() -> Config {
        if let Some(config) = Self::load() {
            return config;
        }

        let config = Config::default();
        if let Err(e) = config.save() {
            log::warn!("Could not write default config: {}", e);
        }
        config
    }

    /// Parse config contents; malformed input yields the defaults
    pub fn parse(contents: &str) -> Config {
        serde_json::from_str(contents).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed config: {}", e);
            Config::default()
        })
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_object_uses_defaults() {
        assert_eq!(Config::parse("{}"), Config::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse(r#"{"open_store_on_start": true, "tick_rate_ms": 250}"#);
        assert!(config.open_store_on_start);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.placeholder_base_url, DEFAULT_PLACEHOLDER_BASE_URL);
    }

    #[test]
    fn test_parse_malformed_falls_back_to_defaults() {
        assert_eq!(Config::parse("not json"), Config::default());
    }
}
