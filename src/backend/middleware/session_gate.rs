/**
 * Route-Protection Middleware
 *
 * This module gates page requests behind the session cookie. It runs once
 * per incoming request, resolves the current user from the cookie via the
 * external service, and redirects unauthenticated requests to the login
 * page. Allow-listed paths bypass the gate entirely.
 */

use axum::{
    extract::{Request, State},
    http::{header::COOKIE, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::backend::server::state::AppState;
use crate::shared::User;

/// Name of the cookie carrying the service access token
pub const SESSION_COOKIE: &str = "kimbap-access-token";

/// Path prefixes exempt from the authentication gate
pub const ALLOW_LIST: &[&str] = &["/api", "/static", "/assets/image", "/favicon.ico", "/login"];

/// Where unauthenticated requests are sent
pub const LOGIN_PATH: &str = "/login";

/// The member resolved by the gate, available to page handlers
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Whether a path bypasses the gate
pub fn is_exempt(path: &str) -> bool {
    ALLOW_LIST.iter().any(|prefix| path.starts_with(prefix))
}

/// Extract the session token from the request's Cookie headers
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, token) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then(|| token.to_string())
        })
}

/// Authentication gate
///
/// This middleware:
/// 1. Lets allow-listed paths through untouched
/// 2. Reads the session cookie and resolves the user via the external service
/// 3. Attaches the user to request extensions for page handlers
/// 4. Redirects to the login page when no user can be resolved
///
/// A missing service configuration fails closed: nothing outside the
/// allow-list resolves a user, so everything redirects.
pub async fn session_gate(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if is_exempt(request.uri().path()) {
        return next.run(request).await;
    }

    let user = match (&app_state.service, session_token(request.headers())) {
        (Some(service), Some(token)) => match service.current_user(&token).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("session lookup failed: {e}");
                None
            }
        },
        _ => None,
    };

    match user {
        Some(user) => {
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
        None => Redirect::to(LOGIN_PATH).into_response(),
    }
}

/// Implement FromRequestParts so CurrentUser can be used as an extractor
impl axum::extract::FromRequestParts<AppState> for CurrentUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            tracing::warn!("CurrentUser not found in request extensions");
            StatusCode::UNAUTHORIZED
        })
    }
}
