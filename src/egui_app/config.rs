use crate::service::ServiceConfig;
use crate::shared::{AppConfig, AppConfigBuilder, ConfigError};

/// Default service URL for local development
const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:54321";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let service_url =
            std::env::var("SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        let anon_key = std::env::var("SERVICE_ANON_KEY").unwrap_or_default();
        let app = AppConfig::builder()
            .service_url(service_url)
            .anon_key(anon_key)
            .build()
            .expect("default app config is valid");
        Self { app }
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    pub fn service_url(&self) -> &str {
        self.app.service_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL)
    }

    pub fn anon_key(&self) -> &str {
        self.app.anon_key.as_deref().unwrap_or_default()
    }

    /// Connection settings for the external service client
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::new(self.service_url(), self.anon_key())
    }
}
