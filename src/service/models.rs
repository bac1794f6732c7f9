//! Wire types for the external service's REST surface.
//!
//! These mirror the provider's JSON payloads and are converted into the
//! normalized `shared` models at the edge. The metadata bag is decoded into
//! the typed `UserMetadata` record rather than an open map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::{AuthSession, User, UserMetadata};

/// Account object as the auth endpoints return it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    /// Set once the address has been confirmed
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
    /// Set when a confirmation email has gone out
    #[serde(default)]
    pub confirmation_sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionUser {
    /// Normalize into the UI-facing model.
    ///
    /// The display name falls back to the email local-part when the metadata
    /// carries no name (or an empty one).
    pub fn into_user(self) -> User {
        let name = self
            .user_metadata
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| User::default_name(&self.email).to_string());
        User {
            id: self.id,
            email: self.email,
            name,
            is_admin: self.user_metadata.is_admin.unwrap_or(false),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Whether the account still needs its email address confirmed.
    pub fn needs_confirmation(&self) -> bool {
        self.email_confirmed_at.is_none()
    }
}

/// Session object returned by sign-in and auto-confirmed sign-up.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionPayload {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub token_type: String,
    pub user: SessionUser,
}

impl SessionPayload {
    pub fn into_session(self) -> AuthSession {
        AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_in: self.expires_in,
            token_type: self.token_type,
            user: self.user.into_user(),
        }
    }
}

/// Sign-up response: a full session when the service auto-confirms, or just
/// the pending account when email confirmation is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignupPayload {
    Session(SessionPayload),
    Pending(SessionUser),
}

/// Error body shapes the provider uses across its endpoints.
///
/// Auth errors arrive as `{"code":422,"msg":"..."}`, OAuth-style errors as
/// `{"error":"...","error_description":"..."}` and table errors as
/// `{"message":"..."}`. All are optional here; `message()` picks whichever
/// is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The most specific message the payload carries, if any.
    pub fn message(&self) -> Option<String> {
        self.msg
            .clone()
            .or_else(|| self.message.clone())
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_user(metadata: UserMetadata) -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            email: "kimbap@example.com".to_string(),
            user_metadata: metadata,
            email_confirmed_at: None,
            confirmation_sent_at: Some(Utc::now()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_into_user_uses_metadata_name() {
        let user = session_user(UserMetadata {
            name: Some("김밥".to_string()),
            is_admin: Some(true),
        })
        .into_user();
        assert_eq!(user.name, "김밥");
        assert!(user.is_admin);
    }

    #[test]
    fn test_into_user_falls_back_to_local_part() {
        let user = session_user(UserMetadata::default()).into_user();
        assert_eq!(user.name, "kimbap");
        assert!(user.has_default_name());
        assert!(!user.is_admin);
    }

    #[test]
    fn test_into_user_treats_empty_name_as_unset() {
        let user = session_user(UserMetadata {
            name: Some(String::new()),
            is_admin: None,
        })
        .into_user();
        assert_eq!(user.name, "kimbap");
    }

    #[test]
    fn test_error_body_prefers_msg() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"code":422,"msg":"User already registered","error":"unprocessable"}"#,
        )
        .unwrap();
        assert_eq!(body.message().as_deref(), Some("User already registered"));
    }

    #[test]
    fn test_error_body_falls_through_variants() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"invalid_grant","error_description":"Bad creds"}"#)
                .unwrap();
        assert_eq!(body.message().as_deref(), Some("Bad creds"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.message().is_none());
    }

    #[test]
    fn test_signup_payload_decodes_both_shapes() {
        let pending = r#"{
            "id": "4b1f6d0e-8c1c-4a2f-9a51-6d6a7c2f9f10",
            "email": "kimbap@example.com",
            "confirmation_sent_at": "2024-03-01T00:00:00Z",
            "created_at": "2024-03-01T00:00:00Z",
            "updated_at": "2024-03-01T00:00:00Z"
        }"#;
        match serde_json::from_str::<SignupPayload>(pending).unwrap() {
            SignupPayload::Pending(user) => assert!(user.needs_confirmation()),
            SignupPayload::Session(_) => panic!("expected pending account"),
        }

        let session = r#"{
            "access_token": "token",
            "refresh_token": "refresh",
            "expires_in": 3600,
            "token_type": "bearer",
            "user": {
                "id": "4b1f6d0e-8c1c-4a2f-9a51-6d6a7c2f9f10",
                "email": "kimbap@example.com",
                "email_confirmed_at": "2024-03-01T00:00:00Z",
                "created_at": "2024-03-01T00:00:00Z",
                "updated_at": "2024-03-01T00:00:00Z"
            }
        }"#;
        match serde_json::from_str::<SignupPayload>(session).unwrap() {
            SignupPayload::Session(payload) => {
                assert_eq!(payload.token_type, "bearer");
                assert!(!payload.user.needs_confirmation());
            }
            SignupPayload::Pending(_) => panic!("expected session"),
        }
    }
}
