/**
 * Router Configuration
 *
 * This module provides the main router creation function.
 *
 * # Route Order
 *
 * 1. Page routes (entry, login)
 * 2. Static file serving
 * 3. Fallback handler (404)
 *
 * The session gate is layered over all of the above, including the fallback,
 * so unknown paths outside the allow-list also redirect to the login page.
 */

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::backend::middleware::session_gate::session_gate;
use crate::backend::routes::pages;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `GET /` - Entry page with the member greeting
/// - `GET /login` - Login page (allow-listed)
/// - `GET /static/*` - Static assets from the public directory
/// - anything else - 404, still behind the gate
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/", get(pages::entry_page))
        .route("/login", get(pages::login_page))
        .nest_service("/static", ServeDir::new("public"))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            session_gate,
        ))
        .with_state(app_state)
}
