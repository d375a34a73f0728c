use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default character API endpoint
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the character API
    pub base_url: String,

    /// Page to load on startup
    pub start_page: u32,

    /// Tick interval for the event loop, in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            start_page: 1,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    /// Build the configuration from defaults overlaid with environment
    /// variables (`RICKDEX_BASE_URL`, `RICKDEX_START_PAGE`)
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("RICKDEX_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(page) = std::env::var("RICKDEX_START_PAGE") {
            if let Ok(page) = page.parse::<u32>() {
                config.start_page = page;
            }
        }

        debug!("Configuration loaded: {:?}", config);
        config
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(anyhow!("Base URL must be an http(s) URL: {}", self.base_url));
        }

        if self.start_page == 0 {
            return Err(anyhow!("Start page must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_page, 1);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.start_page = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.base_url = "ftp://nope".to_string();
        assert!(config.validate().is_err());
    }
}
