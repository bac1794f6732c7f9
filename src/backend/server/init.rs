/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server: loading
 * the external service handle and assembling the router.
 *
 * # Initialization Process
 *
 * 1. Load the external service client from the environment
 * 2. Create the application state
 * 3. Create and configure the router with the session gate
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_service;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// A missing service configuration does not prevent startup; the session
/// gate fails closed until the environment is fixed.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing 코드 김밥 server");

    let service = load_service();
    let app_state = AppState { service };

    create_router(app_state)
}
