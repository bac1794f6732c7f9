//! Application configuration module
//!
//! Provides configuration types for the application. The only values this
//! crate needs are the external service's URL and publishable key; both are
//! supplied by the environment.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// External auth/database service URL
    pub service_url: Option<String>,
    /// Publishable (anonymous) API key for the service
    pub anon_key: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    service_url: Option<String>,
    anon_key: Option<String>,
}

impl AppConfigBuilder {
    /// Set the service URL
    pub fn service_url(mut self, url: String) -> Self {
        self.service_url = Some(url);
        self
    }

    /// Set the publishable API key
    pub fn anon_key(mut self, key: String) -> Self {
        self.anon_key = Some(key);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        if let Some(url) = &self.service_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(AppConfig {
            service_url: self.service_url,
            anon_key: self.anon_key,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accepts_http_url() {
        let config = AppConfig::builder()
            .service_url("http://127.0.0.1:54321".to_string())
            .anon_key("anon".to_string())
            .build()
            .unwrap();
        assert_eq!(config.service_url.as_deref(), Some("http://127.0.0.1:54321"));
        assert_eq!(config.anon_key.as_deref(), Some("anon"));
    }

    #[test]
    fn test_builder_rejects_bare_host() {
        let result = AppConfig::builder()
            .service_url("127.0.0.1:54321".to_string())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_default_is_empty() {
        let config = AppConfig::default();
        assert!(config.service_url.is_none());
        assert!(config.anon_key.is_none());
    }
}
