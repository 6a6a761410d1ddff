//! Build-time configuration
//!
//! Values are baked in when the bundle is compiled; the app cannot read the
//! process environment once it is running in the browser.

use log::{info, warn, LevelFilter};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the remote API, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(
            option_env!("PROJECT_BOARD_API_URL"),
            option_env!("PROJECT_BOARD_LOG"),
        )
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = match api_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                info!("PROJECT_BOARD_API_URL not set, using default: {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_string()
            }
        };

        let log_level = log_level
            .map(|raw| {
                raw.parse().unwrap_or_else(|e| {
                    warn!("Invalid PROJECT_BOARD_LOG value {raw:?}: {e}");
                    DEFAULT_LOG_LEVEL
                })
            })
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_values(None, None), AppConfig::default());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://api.example.com/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_falls_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
