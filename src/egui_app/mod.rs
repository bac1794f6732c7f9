//! egui Native Desktop App Module
//!
//! Native desktop client for the study group tracker, built with egui/eframe.
//! All data comes from the external auth/database service through the
//! `service` client; this module owns the screens, the form state machines
//! and the client-side query cache.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Application entry point (binary)
//! ├── config.rs   - Configuration (service URL and key)
//! ├── forms/      - Signup and login form state machines
//! ├── queries/    - Query cache and user operations
//! ├── period.rs   - Posting period store
//! ├── state/      - Central app state and async result polling
//! ├── theme/      - Colors
//! └── views/      - Screens: login, signup, entry header
//! ```
//!
//! # Example
//!
//! ```text
//! cargo run --bin egui_app
//! ```

pub mod config;
pub mod forms;
pub mod period;
pub mod queries;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use forms::{LoginForm, SignupForm};
pub use queries::{QueryCache, UserDirectory};
pub use state::{AppState, Screen, UserSlot};
