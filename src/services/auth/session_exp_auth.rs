//! Session-cookie authentication with a time-to-live.
//!
//! Wraps [`CookieSessionAuth`] and adds the age check on lookup. Expired
//! sessions are not purged: they stay in the store and simply stop resolving.
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};

use super::request::AuthRequest;
use super::session_auth::CookieSessionAuth;
use super::strategy::AuthStrategy;
use super::user_resolver::User;

#[derive(Debug, Clone)]
pub struct ExpiringSessionAuth {
    inner: CookieSessionAuth,
    // seconds; <= 0 disables expiry
    session_duration: i64,
}

impl ExpiringSessionAuth {
    pub fn new(inner: CookieSessionAuth, session_duration: i64) -> Self {
        Self {
            inner,
            session_duration,
        }
    }

    pub fn inner(&self) -> &CookieSessionAuth {
        &self.inner
    }

    fn user_id_at(&self, session_id: Option<&str>, now: DateTime<Utc>) -> Option<String> {
        let session = self.inner.lookup(session_id)?;

        if self.session_duration <= 0 {
            return Some(session.user_id);
        }

        let Some(created_at) = session.created_at else {
            tracing::debug!("session has no creation time, treating as expired");
            return None;
        };

        // an expiry past chrono's range is never reached
        let Some(expires_at) = ChronoDuration::try_seconds(self.session_duration)
            .and_then(|ttl| created_at.checked_add_signed(ttl))
        else {
            return Some(session.user_id);
        };
        if now >= expires_at {
            tracing::debug!(expires_at = %expires_at, "session expired");
            return None;
        }

        Some(session.user_id)
    }
}

#[async_trait]
impl AuthStrategy for ExpiringSessionAuth {
    fn name(&self) -> &'static str {
        "session_exp_auth"
    }

    fn session_cookie(&self, request: &dyn AuthRequest) -> Option<String> {
        self.inner.session_cookie(request)
    }

    fn extract_credential(&self, request: &dyn AuthRequest) -> Option<String> {
        self.inner.extract_credential(request)
    }

    async fn resolve_identity(&self, request: &dyn AuthRequest) -> Option<User> {
        let session_id = self.extract_credential(request);
        let user_id = self.user_id_for_session_id(session_id.as_deref());
        self.inner.resolve_user(user_id).await
    }

    fn session_cookie_name(&self) -> Option<&str> {
        self.inner.session_cookie_name()
    }

    fn create_session(&self, user_id: &str) -> Option<String> {
        self.inner.store_session(user_id, Some(Utc::now()))
    }

    fn user_id_for_session_id(&self, session_id: Option<&str>) -> Option<String> {
        self.user_id_at(session_id, Utc::now())
    }

    fn destroy_session(&self, request: &dyn AuthRequest) -> bool {
        self.inner
            .destroy_with(request, |id| self.user_id_for_session_id(id))
    }
}
