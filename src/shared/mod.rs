//! Shared types used by both the native client and the backend.
//!
//! Everything here is serialization-friendly and free of UI or server
//! dependencies: user and session models normalized from the external
//! service's payloads, and the application configuration builder.

pub mod config;
pub mod user;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use user::{AuthSession, Profile, SignupData, User, UserMetadata, UserUpdate};
