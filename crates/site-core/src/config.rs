//! Site configuration
//!
//! Values are baked in at build time from the environment and may be
//! overridden at runtime by the hosting page (see `ConfigOverrides`).

use serde::{Deserialize, Serialize};

pub const DEFAULT_SESSION_KEY: &str = "procorp.auth.access_token";
pub const DEFAULT_NEWS_PAGE_SIZE: usize = 3;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Connection details for the hosted backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub backend_url: Option<String>,
    pub anon_key: Option<String>,
    /// localStorage key holding the signed-in user's access token
    pub session_key: String,
    pub news_page_size: usize,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            anon_key: None,
            session_key: DEFAULT_SESSION_KEY.to_string(),
            news_page_size: DEFAULT_NEWS_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Runtime overrides; every present field replaces the built-in value
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub anon_key: Option<String>,
    pub session_key: Option<String>,
    pub news_page_size: Option<usize>,
    pub log_level: Option<String>,
}

impl SiteConfig {
    /// Configuration captured from `PROCORP_*` variables at compile time
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        config.backend_url = option_env!("PROCORP_BACKEND_URL").map(str::to_string);
        config.anon_key = option_env!("PROCORP_ANON_KEY").map(str::to_string);
        if let Some(level) = option_env!("PROCORP_LOG") {
            config.log_level = level.to_string();
        }
        config
    }

    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.backend_url.is_some() {
            self.backend_url = overrides.backend_url;
        }
        if overrides.anon_key.is_some() {
            self.anon_key = overrides.anon_key;
        }
        if let Some(key) = overrides.session_key {
            self.session_key = key;
        }
        if let Some(size) = overrides.news_page_size {
            self.news_page_size = size.max(1);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }

    /// Backend connection, when both URL and key are set and non-empty
    pub fn backend(&self) -> Option<BackendConfig> {
        let url = self.backend_url.as_deref().filter(|s| !s.trim().is_empty())?;
        let anon_key = self.anon_key.as_deref().filter(|s| !s.trim().is_empty())?;
        Some(BackendConfig { url: url.to_string(), anon_key: anon_key.to_string() })
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_requires_url_and_key() {
        let mut config = SiteConfig::default();
        assert!(config.backend().is_none());

        config.backend_url = Some("https://db.example.com".to_string());
        assert!(config.backend().is_none());

        config.anon_key = Some("  ".to_string());
        assert!(config.backend().is_none());

        config.anon_key = Some("public-anon".to_string());
        let backend = config.backend().expect("backend should be configured");
        assert_eq!(backend.url, "https://db.example.com");
    }

    #[test]
    fn test_overrides_replace_present_fields_only() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"backend_url": "https://db.example.com", "news_page_size": 0}"#).unwrap();
        let config = SiteConfig::default().merge(overrides);
        assert_eq!(config.backend_url.as_deref(), Some("https://db.example.com"));
        assert_eq!(config.session_key, DEFAULT_SESSION_KEY);
        assert_eq!(config.news_page_size, 1);
    }

    #[test]
    fn test_log_level_falls_back_to_info() {
        let mut config = SiteConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
