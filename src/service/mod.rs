//! HTTP client for the external auth/database service.
//!
//! The service owns authentication, session issuance, password handling and
//! all persistence. This module is deliberately thin: a stateless client
//! handle plus the wire types its endpoints speak. Every operation is a
//! single HTTP call; the provider's error message strings are surfaced
//! verbatim so callers can map the ones they know.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ServiceClient, ServiceConfig, SignupOutcome};
pub use error::ServiceError;
pub use models::{ErrorBody, SessionPayload, SessionUser};
