/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * The state holds only an `Option<Arc<ServiceClient>>`; the client itself is
 * stateless, so cloning the state per request is cheap and nothing is shared
 * mutably between requests.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::service::ServiceClient;

/// Application state for the Axum server
///
/// # Fields
///
/// * `service` - Handle to the external auth/database service. `None` when
///   the environment carries no service configuration; the session gate then
///   fails closed.
#[derive(Clone)]
pub struct AppState {
    pub service: Option<Arc<ServiceClient>>,
}

/// Implement FromRef for the service handle
///
/// This allows Axum handlers to extract `Option<Arc<ServiceClient>>` directly
/// from `AppState`.
impl FromRef<AppState> for Option<Arc<ServiceClient>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.service.clone()
    }
}
