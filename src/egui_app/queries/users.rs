//! User operations over the external service, routed through the query cache.
//!
//! `UserDirectory` owns the session handed out by the service and is the only
//! place the client talks to it. Reads go through `QueryCache`; mutations
//! update the cache optimistically and mark it stale once the call settles so
//! the next read reconciles with the source of truth.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::egui_app::queries::cache::{FreshnessPolicy, QueryCache, QueryKey};
use crate::service::{ServiceClient, ServiceError};
use crate::shared::{AuthSession, Profile, SignupData, User, UserUpdate};

const CURRENT_USER: &str = "currentUser";
const PROFILE: &str = "profile";

/// The signed-in member stays fresh for five minutes, retained for thirty.
const CURRENT_USER_POLICY: FreshnessPolicy =
    FreshnessPolicy::new(Duration::from_secs(5 * 60), Duration::from_secs(30 * 60));

/// Profile rows are always revalidated but served from retention meanwhile.
const PROFILE_POLICY: FreshnessPolicy =
    FreshnessPolicy::new(Duration::ZERO, Duration::from_secs(30 * 60));

/// Fixed wait before the post-signup check for the trigger-created profile.
const TRIGGER_CHECK_DELAY: Duration = Duration::from_secs(1);

/// Result of a completed registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub needs_confirmation: bool,
}

/// Client-side accessor for everything user-shaped.
pub struct UserDirectory {
    service: Arc<ServiceClient>,
    cache: QueryCache,
    session: RwLock<Option<AuthSession>>,
}

impl UserDirectory {
    pub fn new(service: Arc<ServiceClient>) -> Self {
        Self {
            service,
            cache: QueryCache::new(),
            session: RwLock::new(None),
        }
    }

    /// The underlying cache, for peeking at optimistic state.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// The current service session, if any.
    pub async fn session(&self) -> Option<AuthSession> {
        self.session.read().await.clone()
    }

    async fn access_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|session| session.access_token.clone())
    }

    /// The signed-in member, or `None` when there is no session.
    ///
    /// Never fails on a missing session; service errors are surfaced.
    pub async fn current_user(&self) -> Result<Option<User>, ServiceError> {
        let Some(token) = self.access_token().await else {
            return Ok(None);
        };
        let service = Arc::clone(&self.service);
        self.cache
            .fetch(QueryKey::of(CURRENT_USER), CURRENT_USER_POLICY, move || {
                async move { service.current_user(&token).await }
            })
            .await
    }

    /// A stored profile row by account id; `None` when it does not exist.
    pub async fn profile_by_id(&self, id: Uuid) -> Result<Option<Profile>, ServiceError> {
        let service = Arc::clone(&self.service);
        self.cache
            .fetch(
                QueryKey::with_param(PROFILE, id.to_string()),
                PROFILE_POLICY,
                move || async move { service.profile_by_id(id).await },
            )
            .await
    }

    /// Apply a partial metadata update.
    ///
    /// In-flight reads of the current user are cancelled and the cached value
    /// is merged with the update before the network call goes out, so the UI
    /// reflects the change immediately. Whatever the outcome, the entry is
    /// marked stale afterwards; there is no explicit rollback on failure.
    pub async fn update_user(&self, update: UserUpdate) -> Result<(), ServiceError> {
        let key = QueryKey::of(CURRENT_USER);
        let token = self.access_token().await;

        self.cache.cancel(&key).await;
        if let Some(Some(current)) = self.cache.peek::<Option<User>>(&key).await {
            self.cache.put(&key, Some(current.apply(&update))).await;
        }

        let result = match token {
            Some(token) => self
                .service
                .update_user_metadata(&token, &update)
                .await
                .map(|_| ()),
            None => Err(ServiceError::service(401, "Auth session missing")),
        };

        self.cache.invalidate(&key).await;
        result
    }

    /// Register a new account.
    ///
    /// After a successful sign-up, waits one second and checks once that the
    /// service-side trigger created the profile row. The check is best-effort:
    /// its outcome is logged and discarded, never retried.
    pub async fn register(&self, data: SignupData) -> Result<Registration, ServiceError> {
        let outcome = self.service.sign_up(&data).await?;

        if let Some(session) = &outcome.session {
            *self.session.write().await = Some(session.clone());
        }

        tokio::time::sleep(TRIGGER_CHECK_DELAY).await;
        match self.service.profile_by_id(outcome.user.id).await {
            Ok(Some(_)) => {
                tracing::info!(user_id = %outcome.user.id, "profile row created by trigger")
            }
            Ok(None) => {
                tracing::warn!(user_id = %outcome.user.id, "profile row not found after signup")
            }
            Err(e) => {
                tracing::warn!(user_id = %outcome.user.id, "profile check failed: {e}")
            }
        }

        self.cache.invalidate(&QueryKey::of(CURRENT_USER)).await;

        Ok(Registration {
            user: outcome.user,
            needs_confirmation: outcome.needs_confirmation,
        })
    }

    /// Re-send the signup confirmation email.
    pub async fn resend_confirmation(&self, email: &str) -> Result<(), ServiceError> {
        self.service.resend_confirmation(email).await
    }

    /// Exchange credentials for a session and prime the cache.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, ServiceError> {
        let session = self.service.sign_in(email, password).await?;
        *self.session.write().await = Some(session.clone());
        self.cache
            .put(&QueryKey::of(CURRENT_USER), Some(session.user.clone()))
            .await;
        Ok(session)
    }

    /// Terminate the session.
    ///
    /// The sign-out call's own failure is logged and otherwise ignored; local
    /// state is dropped regardless.
    pub async fn sign_out(&self) {
        if let Some(token) = self.access_token().await {
            if let Err(e) = self.service.sign_out(&token).await {
                tracing::warn!("sign-out call failed: {e}");
            }
        }
        *self.session.write().await = None;
        self.cache.clear().await;
    }

    /// Cache key for the signed-in member, exposed for tests and views.
    pub fn current_user_key() -> QueryKey {
        QueryKey::of(CURRENT_USER)
    }
}
