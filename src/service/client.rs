//! Client handle for the external auth/database service.
//!
//! `ServiceClient` is a stateless factory over `reqwest::Client`: it holds the
//! service URL and publishable key and exposes one method per remote
//! operation. Session state lives with the caller; the server-side gate and
//! the desktop client both construct their own handle from the same config.

use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::service::error::ServiceError;
use crate::service::models::{ErrorBody, SessionPayload, SessionUser, SignupPayload};
use crate::shared::{AuthSession, Profile, SignupData, User, UserUpdate};

/// Connection settings for the external service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    base_url: String,
    anon_key: String,
}

impl ServiceConfig {
    /// Create a config from a service URL and publishable key.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            anon_key: anon_key.into(),
        }
    }

    /// Read `SERVICE_URL` and `SERVICE_ANON_KEY` from the environment.
    ///
    /// Returns `None` when either is missing; callers decide whether that is
    /// fatal (the desktop client) or a degraded mode (the server gate).
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("SERVICE_URL").ok()?;
        let anon_key = std::env::var("SERVICE_ANON_KEY").ok()?;
        Some(Self::new(base_url, anon_key))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Result of a sign-up call.
#[derive(Debug, Clone)]
pub struct SignupOutcome {
    /// The created account
    pub user: User,
    /// Session, present only when the service auto-confirmed the address
    pub session: Option<AuthSession>,
    /// Whether a confirmation email is still pending
    pub needs_confirmation: bool,
}

/// Stateless handle to the external service.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl ServiceClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.config.base_url, path)
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1{}", self.config.base_url, path)
    }

    /// Resolve the account behind an access token.
    ///
    /// A missing or rejected session resolves to `Ok(None)` rather than an
    /// error; anything else the service reports is surfaced.
    pub async fn current_user(&self, access_token: &str) -> Result<Option<User>, ServiceError> {
        let response = self
            .http
            .get(self.auth_url("/user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED
            || response.status() == StatusCode::FORBIDDEN
        {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let user: SessionUser = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(Some(user.into_user()))
    }

    /// Register a new account.
    ///
    /// The display name travels in the metadata bag; the service-side trigger
    /// copies it into the profile row.
    pub async fn sign_up(&self, data: &SignupData) -> Result<SignupOutcome, ServiceError> {
        let body = json!({
            "email": data.email,
            "password": data.password,
            "data": { "name": data.name },
        });
        let response = self
            .http
            .post(self.auth_url("/signup"))
            .header("apikey", &self.config.anon_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let payload: SignupPayload = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(match payload {
            SignupPayload::Session(session) => {
                let needs_confirmation = session.user.needs_confirmation();
                let session = session.into_session();
                SignupOutcome {
                    user: session.user.clone(),
                    session: Some(session),
                    needs_confirmation,
                }
            }
            SignupPayload::Pending(user) => SignupOutcome {
                needs_confirmation: user.needs_confirmation(),
                user: user.into_user(),
                session: None,
            },
        })
    }

    /// Exchange email and password for a session.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ServiceError> {
        let response = self
            .http
            .post(self.auth_url("/token?grant_type=password"))
            .header("apikey", &self.config.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let payload: SessionPayload = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(payload.into_session())
    }

    /// Terminate the session behind an access token.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), ServiceError> {
        let response = self
            .http
            .post(self.auth_url("/logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// Re-send the signup confirmation email for an address.
    pub async fn resend_confirmation(&self, email: &str) -> Result<(), ServiceError> {
        let response = self
            .http
            .post(self.auth_url("/resend"))
            .header("apikey", &self.config.anon_key)
            .json(&json!({ "type": "signup", "email": email }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// Apply a partial metadata update to the authenticated account.
    pub async fn update_user_metadata(
        &self,
        access_token: &str,
        update: &UserUpdate,
    ) -> Result<User, ServiceError> {
        let response = self
            .http
            .put(self.auth_url("/user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .json(&json!({ "data": update }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let user: SessionUser = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(user.into_user())
    }

    /// Look up a stored profile row by account id.
    ///
    /// Returns `Ok(None)` when no row exists; any other lookup failure is an
    /// error.
    pub async fn profile_by_id(&self, id: Uuid) -> Result<Option<Profile>, ServiceError> {
        let response = self
            .http
            .get(self.rest_url("/profiles"))
            .header("apikey", &self.config.anon_key)
            .query(&[
                ("id", format!("eq.{id}")),
                ("select", "*".to_string()),
                ("limit", "1".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let rows: Vec<Profile> = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(rows.into_iter().next())
    }
}

/// Turn a non-success response into a `ServiceError`, preserving the
/// provider's message string.
async fn error_from_response(response: reqwest::Response) -> ServiceError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message().unwrap_or_else(|| status.to_string()),
        Err(_) => status.to_string(),
    };
    ServiceError::service(status.as_u16(), message)
}
