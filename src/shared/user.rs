//! User, profile and session models.
//!
//! These are the normalized views of what the external auth/database service
//! stores. Normalization happens at read time: the display name falls back to
//! the email local-part when the account metadata carries no name, and the UI
//! uses that equality to decide whether to offer the "set your name" prompt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata bag attached to an account by the auth service.
///
/// The service stores this as an arbitrary key/value object; only the fields
/// this application writes are modeled, as typed optional fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Display name chosen by the member
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Study group administrator flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// A signed-in member, normalized for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique account ID (UUID), owned by the auth service
    pub id: Uuid,
    /// Account email address
    pub email: String,
    /// Display name; the email local-part when metadata carries no name
    pub name: String,
    /// Study group administrator flag
    pub is_admin: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last account update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Derive the default display name from an email address.
    pub fn default_name(email: &str) -> &str {
        email.split('@').next().unwrap_or(email)
    }

    /// Whether the display name is still the email-derived default.
    pub fn has_default_name(&self) -> bool {
        self.name == Self::default_name(&self.email)
    }

    /// Merge a partial update into a copy of this user.
    ///
    /// Mirrors what the service will store so the cache can be updated before
    /// the network call resolves. Timestamps stay untouched; the service owns
    /// them and the next fresh read reconciles.
    pub fn apply(&self, update: &UserUpdate) -> User {
        let mut user = self.clone();
        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(is_admin) = update.is_admin {
            user.is_admin = is_admin;
        }
        user
    }
}

/// Session issued by the external auth service.
///
/// Held transiently in memory only; the service owns its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token for authenticated calls
    pub access_token: String,
    /// Token used to obtain a new access token
    pub refresh_token: String,
    /// Seconds until the access token expires
    pub expires_in: u64,
    /// Token type, "bearer"
    pub token_type: String,
    /// The authenticated member
    pub user: User,
}

/// Profile row created by the service-side trigger on account creation.
///
/// Stored independently of the auth account and fetched by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Matches the auth account ID
    pub id: Uuid,
    /// Email copied by the trigger
    pub email: String,
    /// Display name, if the trigger captured one
    pub name: Option<String>,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Registration input. Ephemeral; not retained beyond the sign-up call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupData {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Partial update to account metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

impl UserUpdate {
    /// Update that only changes the display name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            is_admin: None,
        }
    }
}
