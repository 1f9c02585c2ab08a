//! The authentication strategy contract and the per-request decision.
//!
//! Every strategy answers the same questions: does this path need auth, which
//! credential did the request carry, and who does it belong to. Session
//! capable strategies additionally create and destroy sessions; the defaults
//! here describe a strategy without sessions.
use std::fmt;

use async_trait::async_trait;

use super::credentials::{self, CredentialSource};
use super::path_matcher::{self, ExcludedPaths};
use super::request::AuthRequest;
use super::user_resolver::User;

/// Outcome of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// The path is excluded; nothing was checked.
    NotRequired,
    Authenticated(User),
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No credential on the request (maps to 401).
    MissingCredential,
    /// A credential was present but did not resolve to a user (maps to 403).
    InvalidCredential,
}

#[async_trait]
pub trait AuthStrategy: Send + Sync + fmt::Debug {
    /// Name used in logs (matches the `AUTH_TYPE` value).
    fn name(&self) -> &'static str;

    fn require_auth(&self, path: Option<&str>, excluded: &ExcludedPaths) -> bool {
        path_matcher::require_auth(path, excluded)
    }

    fn authorization_header(&self, request: &dyn AuthRequest) -> Option<String> {
        credentials::extract(Some(request), &CredentialSource::AuthorizationHeader)
    }

    /// Cookie carrying the session id; `None` when the strategy has no sessions.
    fn session_cookie(&self, _request: &dyn AuthRequest) -> Option<String> {
        None
    }

    /// The credential this strategy authenticates with.
    fn extract_credential(&self, request: &dyn AuthRequest) -> Option<String>;

    async fn resolve_identity(&self, request: &dyn AuthRequest) -> Option<User>;

    /// Name of the session cookie, if the strategy issues sessions.
    fn session_cookie_name(&self) -> Option<&str> {
        None
    }

    fn create_session(&self, _user_id: &str) -> Option<String> {
        None
    }

    fn user_id_for_session_id(&self, _session_id: Option<&str>) -> Option<String> {
        None
    }

    fn destroy_session(&self, _request: &dyn AuthRequest) -> bool {
        false
    }

    /// Run the whole request check: exclusion, credential, identity.
    async fn authenticate(
        &self,
        request: &dyn AuthRequest,
        excluded: &ExcludedPaths,
    ) -> AuthDecision {
        if !self.require_auth(request.path(), excluded) {
            return AuthDecision::NotRequired;
        }

        if self.extract_credential(request).is_none() {
            return AuthDecision::Rejected(RejectReason::MissingCredential);
        }

        match self.resolve_identity(request).await {
            Some(user) => AuthDecision::Authenticated(user),
            None => AuthDecision::Rejected(RejectReason::InvalidCredential),
        }
    }
}
