//! Backend Module
//!
//! Server-side code for the study group tracker: an Axum HTTP server that
//! serves the application pages and protects them behind the session cookie.
//! The server holds no user data of its own; every session is resolved
//! against the external auth/database service on the way in.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and page handlers
//! - **`middleware`** - The route-protection gate
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Request Flow
//!
//! Every incoming request first passes the gate: allow-listed paths (`/api`,
//! the static asset mounts, `favicon.ico`, `/login`) go straight through;
//! everything else must resolve a user from its session cookie or is
//! redirected to `/login`. The gate keeps no state between requests.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use middleware::session_gate::CurrentUser;
pub use server::init::create_app;
pub use server::state::AppState;
