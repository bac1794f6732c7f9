//! 코드 김밥 - Main Library
//!
//! 코드 김밥 ("code kimbap") is a blog study group tracker. Members sign up,
//! confirm their email address, and get greeted by name on the entry screen of
//! the current posting round. Authentication, session issuance and data
//! persistence are delegated entirely to an external auth/database service;
//! this crate is the glue around it.
//!
//! # Module Structure
//!
//! The library is organized into four main modules:
//!
//! - **`shared`** - Types shared between the client and the backend
//!   - User, profile and session models with display-name normalization
//!   - Application configuration
//!
//! - **`service`** - Thin HTTP client for the external auth/database service
//!   - Session retrieval, sign-up, sign-in, sign-out
//!   - Confirmation email resend, user metadata updates
//!   - Profile table lookups
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - Signup and login screens
//!   - Entry header with inline name editing
//!   - Query cache with freshness windows and optimistic updates
//!
//! - **`backend`** - Server shell (only compiled with the `ssr` feature)
//!   - Axum page routes and static file serving
//!   - Route-protection middleware resolving the session cookie against the
//!     external service
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend module and the `kimbap-server` binary.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use code_kimbap::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with an Axum server
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! ```text
//! cargo run --bin egui_app
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations, `Option<T>` for optional values
//! - Service failures carry the provider's message string verbatim so the UI
//!   layer can map known messages to localized text

/// Shared types and data structures
pub mod shared;

/// HTTP client for the external auth/database service
pub mod service;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
pub mod egui_app;
