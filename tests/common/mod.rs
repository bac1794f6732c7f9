//! Shared helpers for integration tests.
//!
//! Spins up a wiremock stand-in for the external auth/database service and
//! wires the crate's client against it.
#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use code_kimbap::egui_app::UserDirectory;
use code_kimbap::service::{ServiceClient, ServiceConfig};

pub const USER_ID: &str = "4b1f6d0e-8c1c-4a2f-9a51-6d6a7c2f9f10";
pub const USER_EMAIL: &str = "kimbap@example.com";

/// Wiremock stand-in for the external service.
pub struct FakeService {
    pub server: MockServer,
}

impl FakeService {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn client(&self) -> ServiceClient {
        ServiceClient::new(ServiceConfig::new(self.server.uri(), "test-anon-key"))
    }

    pub fn directory(&self) -> Arc<UserDirectory> {
        Arc::new(UserDirectory::new(Arc::new(self.client())))
    }

    /// JSON body for an auth account, optionally with a metadata name.
    pub fn user_body(name: Option<&str>) -> serde_json::Value {
        let metadata = match name {
            Some(name) => json!({ "name": name }),
            None => json!({}),
        };
        json!({
            "id": USER_ID,
            "email": USER_EMAIL,
            "user_metadata": metadata,
            "email_confirmed_at": "2024-03-01T00:00:00Z",
            "created_at": "2024-03-01T00:00:00Z",
            "updated_at": "2024-03-01T00:00:00Z",
        })
    }

    /// Mount `GET /auth/v1/user` resolving to the given account.
    pub async fn mount_current_user(&self, name: Option<&str>) {
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::user_body(name)))
            .mount(&self.server)
            .await;
    }

    /// Mount `GET /auth/v1/user` rejecting the session.
    pub async fn mount_no_session(&self) {
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "code": 401, "msg": "invalid JWT" })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a sign-up whose account still needs email confirmation.
    pub async fn mount_signup_pending(&self) {
        let mut body = Self::user_body(Some("김밥"));
        body["email_confirmed_at"] = serde_json::Value::Null;
        body["confirmation_sent_at"] = json!("2024-03-01T00:00:00Z");
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a failing sign-up carrying the provider's message string.
    pub async fn mount_signup_error(&self, status: u16, msg: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(json!({ "code": status, "msg": msg })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount the profile table lookup.
    pub async fn mount_profile(&self, exists: bool) {
        let body = if exists {
            json!([{
                "id": USER_ID,
                "email": USER_EMAIL,
                "name": "김밥",
                "created_at": "2024-03-01T00:00:00Z",
            }])
        } else {
            json!([])
        };
        Mock::given(method("GET"))
            .and(path("/rest/v1/profiles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a successful password sign-in.
    pub async fn mount_sign_in(&self) {
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access-token",
                "refresh_token": "refresh-token",
                "expires_in": 3600,
                "token_type": "bearer",
                "user": Self::user_body(Some("김밥")),
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of requests seen for a given method + path.
    pub async fn hits(&self, http_method: &str, request_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| {
                request.method.as_str() == http_method && request.url.path() == request_path
            })
            .count()
    }
}
