//! Client-side data layer over the external service.
//!
//! Splits into two halves: a small keyed cache with freshness windows,
//! request de-duplication and a generation guard (`cache`), and the user
//! operations built on top of it (`users`). The cache is an explicit injected
//! context, never a process-wide global; keys derive deterministically from
//! operation name and parameters.

pub mod cache;
pub mod users;

pub use cache::{FreshnessPolicy, QueryCache, QueryKey};
pub use users::{Registration, UserDirectory};
