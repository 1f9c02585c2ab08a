/*
 * Responsibility
 * - Cookie の session id で認証する strategy (有効期限なし)
 * - session の作成 / 参照 / 破棄
 * - SessionStore は外から注入する (process 内で 1 つを共有)
 */
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::credentials::{self, CredentialSource};
use super::request::AuthRequest;
use super::session_store::{Session, SessionStore, redact_session_id};
use super::strategy::AuthStrategy;
use super::user_resolver::{User, UserResolver};

/// Session-cookie authentication. Sessions live until destroyed.
#[derive(Clone)]
pub struct CookieSessionAuth {
    store: Arc<SessionStore>,
    users: Arc<dyn UserResolver>,
    cookie: CredentialSource,
    cookie_name: String,
}

impl fmt::Debug for CookieSessionAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // session ids stay out of Debug output
        f.debug_struct("CookieSessionAuth")
            .field("cookie_name", &self.cookie_name)
            .field("sessions", &self.store.len())
            .finish()
    }
}

impl CookieSessionAuth {
    pub fn new(
        store: Arc<SessionStore>,
        users: Arc<dyn UserResolver>,
        cookie_name: impl Into<String>,
    ) -> Self {
        let cookie_name = cookie_name.into();
        Self {
            store,
            users,
            cookie: CredentialSource::session_cookie(cookie_name.clone()),
            cookie_name,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Shared by the expiring variant, which stamps `created_at`.
    pub(crate) fn store_session(
        &self,
        user_id: &str,
        created_at: Option<DateTime<Utc>>,
    ) -> Option<String> {
        if user_id.trim().is_empty() {
            tracing::debug!("refusing to create a session without a user id");
            return None;
        }

        let session = self.store.create(user_id, created_at)?;
        tracing::info!(
            user_id = %session.user_id,
            session = redact_session_id(&session.id),
            "session created"
        );
        Some(session.id)
    }

    pub(crate) fn lookup(&self, session_id: Option<&str>) -> Option<Session> {
        let session_id = session_id?;
        let session = self.store.get(session_id);
        if session.is_none() {
            tracing::debug!(
                session = redact_session_id(session_id),
                "unknown session id"
            );
        }
        session
    }

    /// Remove the request's session when `user_id_for` still accepts it.
    pub(crate) fn destroy_with(
        &self,
        request: &dyn AuthRequest,
        user_id_for: impl Fn(Option<&str>) -> Option<String>,
    ) -> bool {
        let Some(session_id) = self.session_cookie(request) else {
            return false;
        };
        if user_id_for(Some(&session_id)).is_none() {
            return false;
        }

        let removed = self.store.remove(&session_id).is_some();
        if removed {
            tracing::info!(
                session = redact_session_id(&session_id),
                "session destroyed"
            );
        }
        removed
    }

    pub(crate) async fn resolve_user(&self, user_id: Option<String>) -> Option<User> {
        let user_id = user_id?;
        let user = self.users.get(&user_id).await;
        if user.is_none() {
            tracing::debug!(user_id = %user_id, "session points at an unknown user");
        }
        user
    }
}

#[async_trait]
impl AuthStrategy for CookieSessionAuth {
    fn name(&self) -> &'static str {
        "session_auth"
    }

    fn session_cookie(&self, request: &dyn AuthRequest) -> Option<String> {
        credentials::extract(Some(request), &self.cookie)
    }

    fn extract_credential(&self, request: &dyn AuthRequest) -> Option<String> {
        self.session_cookie(request)
    }

    async fn resolve_identity(&self, request: &dyn AuthRequest) -> Option<User> {
        let session_id = self.extract_credential(request);
        let user_id = self.user_id_for_session_id(session_id.as_deref());
        self.resolve_user(user_id).await
    }

    fn session_cookie_name(&self) -> Option<&str> {
        Some(self.cookie_name.as_str())
    }

    fn create_session(&self, user_id: &str) -> Option<String> {
        self.store_session(user_id, None)
    }

    fn user_id_for_session_id(&self, session_id: Option<&str>) -> Option<String> {
        self.lookup(session_id).map(|s| s.user_id)
    }

    fn destroy_session(&self, request: &dyn AuthRequest) -> bool {
        self.destroy_with(request, |id| self.user_id_for_session_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::credentials::DEFAULT_SESSION_COOKIE_NAME;
    use crate::services::auth::path_matcher::ExcludedPaths;
    use crate::services::auth::strategy::{AuthDecision, RejectReason};
    use crate::services::auth::user_resolver::InMemoryUserResolver;
    use axum::http::Request;
    use std::collections::HashSet;

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            user_name: format!("name-{id}"),
            image_url: None,
        }
    }

    fn strategy() -> CookieSessionAuth {
        let users = InMemoryUserResolver::with_users([user("u1"), user("u2")]);
        CookieSessionAuth::new(
            Arc::new(SessionStore::new()),
            Arc::new(users),
            DEFAULT_SESSION_COOKIE_NAME,
        )
    }

    fn request_with_session(session_id: &str) -> Request<()> {
        Request::builder()
            .uri("/api/v1/users/me")
            .header("Cookie", format!("{DEFAULT_SESSION_COOKIE_NAME}={session_id}"))
            .body(())
            .unwrap()
    }

    #[test]
    fn create_then_lookup() {
        let auth = strategy();
        let id = auth.create_session("u1").unwrap();

        assert_eq!(auth.user_id_for_session_id(Some(&id)).as_deref(), Some("u1"));
        // no expiry: nothing is stamped
        assert_eq!(auth.store().get(&id).unwrap().created_at, None);
    }

    #[test]
    fn empty_user_id_creates_nothing() {
        let auth = strategy();
        assert_eq!(auth.create_session(""), None);
        assert_eq!(auth.create_session("   "), None);
        assert!(auth.store().is_empty());
    }

    #[test]
    fn absent_or_unknown_session_id() {
        let auth = strategy();
        assert_eq!(auth.user_id_for_session_id(None), None);
        assert_eq!(auth.user_id_for_session_id(Some("nope")), None);
    }

    #[test]
    fn thousand_sessions_thousand_ids() {
        let auth = strategy();
        let ids: HashSet<String> = (0..1000)
            .map(|i| auth.create_session(&format!("user-{i}")).unwrap())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn session_cookie_uses_configured_name() {
        let users = Arc::new(InMemoryUserResolver::new());
        let auth = CookieSessionAuth::new(Arc::new(SessionStore::new()), users, "sid");
        let req = Request::builder()
            .header("Cookie", "_my_session_id=a; sid=b")
            .body(())
            .unwrap();

        assert_eq!(auth.session_cookie(&req).as_deref(), Some("b"));
        assert_eq!(auth.session_cookie_name(), Some("sid"));
    }

    #[test]
    fn destroy_removes_the_session() {
        let auth = strategy();
        let id = auth.create_session("u1").unwrap();
        let req = request_with_session(&id);

        assert!(auth.destroy_session(&req));
        assert_eq!(auth.user_id_for_session_id(Some(&id)), None);
        // second time: already gone
        assert!(!auth.destroy_session(&req));
    }

    #[test]
    fn destroy_without_cookie_or_with_unknown_id() {
        let auth = strategy();
        auth.create_session("u1").unwrap();

        let no_cookie = Request::builder().body(()).unwrap();
        assert!(!auth.destroy_session(&no_cookie));
        assert!(!auth.destroy_session(&request_with_session("unknown")));
        assert_eq!(auth.store().len(), 1);
    }

    #[tokio::test]
    async fn resolve_identity_goes_through_the_resolver() {
        let auth = strategy();
        let id = auth.create_session("u2").unwrap();

        assert_eq!(
            auth.resolve_identity(&request_with_session(&id)).await,
            Some(user("u2"))
        );
    }

    #[tokio::test]
    async fn session_for_unknown_user_resolves_nobody() {
        let auth = strategy();
        let id = auth.create_session("ghost").unwrap();

        assert_eq!(auth.resolve_identity(&request_with_session(&id)).await, None);
    }

    #[tokio::test]
    async fn authenticate_walks_every_state() {
        let auth = strategy();
        let excluded = ExcludedPaths::new(["/api/v1/status/", "/api/v1/auth_session/login/"]);
        let id = auth.create_session("u1").unwrap();

        let status = Request::builder().uri("/api/v1/status").body(()).unwrap();
        assert_eq!(
            auth.authenticate(&status, &excluded).await,
            AuthDecision::NotRequired
        );

        let anonymous = Request::builder().uri("/api/v1/users/me").body(()).unwrap();
        assert_eq!(
            auth.authenticate(&anonymous, &excluded).await,
            AuthDecision::Rejected(RejectReason::MissingCredential)
        );

        // an Authorization header is not this strategy's credential
        let header_only = Request::builder()
            .uri("/api/v1/users/me")
            .header("Authorization", "Basic abc")
            .body(())
            .unwrap();
        assert_eq!(
            auth.authenticate(&header_only, &excluded).await,
            AuthDecision::Rejected(RejectReason::MissingCredential)
        );

        assert_eq!(
            auth.authenticate(&request_with_session("forged"), &excluded)
                .await,
            AuthDecision::Rejected(RejectReason::InvalidCredential)
        );

        assert_eq!(
            auth.authenticate(&request_with_session(&id), &excluded).await,
            AuthDecision::Authenticated(user("u1"))
        );
    }

    #[test]
    fn strategies_sharing_a_store_see_the_same_sessions() {
        let store = Arc::new(SessionStore::new());
        let users: Arc<dyn UserResolver> = Arc::new(InMemoryUserResolver::new());
        let a = CookieSessionAuth::new(Arc::clone(&store), Arc::clone(&users), "sid");
        let b = CookieSessionAuth::new(store, users, "sid");

        let id = a.create_session("u1").unwrap();
        assert_eq!(b.user_id_for_session_id(Some(&id)).as_deref(), Some("u1"));
    }

    #[test]
    fn debug_does_not_leak_session_ids() {
        let auth = strategy();
        let id = auth.create_session("u1").unwrap();
        let out = format!("{auth:?}");
        assert!(!out.contains(&id));
        assert!(out.contains("sessions: 1"));
    }
}
