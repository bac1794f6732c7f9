/**
 * Server Configuration
 *
 * This module loads the connection settings for the external auth/database
 * service from the environment.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup. When
 * the service is not configured the handle is `None` and the session gate
 * fails closed: no user can be resolved, so every gated request redirects
 * to the login page.
 */

use std::sync::Arc;

use crate::service::{ServiceClient, ServiceConfig};

/// Handle to the external service, if configured
pub type ServiceHandle = Option<Arc<ServiceClient>>;

/// Build the external service client from `SERVICE_URL` / `SERVICE_ANON_KEY`.
pub fn load_service() -> ServiceHandle {
    match ServiceConfig::from_env() {
        Some(config) => {
            tracing::info!("external service configured at {}", config.base_url());
            Some(Arc::new(ServiceClient::new(config)))
        }
        None => {
            tracing::warn!(
                "SERVICE_URL / SERVICE_ANON_KEY not set; the session gate will fail closed"
            );
            None
        }
    }
}
