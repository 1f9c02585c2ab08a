//! Credential extraction (Authorization header or session cookie).
use axum::http::header;

use super::request::AuthRequest;

/// Cookie name used when `SESSION_NAME` is not configured.
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "_my_session_id";

/// Where a strategy looks for its credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    AuthorizationHeader,
    Cookie(String),
}

impl CredentialSource {
    pub fn session_cookie(name: impl Into<String>) -> Self {
        Self::Cookie(name.into())
    }
}

/// Pull the raw credential out of `request`.
///
/// Missing request, missing value and empty value all yield `None`.
pub fn extract(request: Option<&dyn AuthRequest>, source: &CredentialSource) -> Option<String> {
    let request = request?;
    let raw = match source {
        CredentialSource::AuthorizationHeader => request.header(header::AUTHORIZATION.as_str()),
        CredentialSource::Cookie(name) => request.cookie(name),
    }?;

    (!raw.is_empty()).then(|| raw.to_string())
}
