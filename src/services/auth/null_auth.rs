use async_trait::async_trait;

use super::request::AuthRequest;
use super::strategy::AuthStrategy;
use super::user_resolver::User;

/// Baseline strategy: reads the `Authorization` header but never resolves a
/// user, so every protected path is rejected. No sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuth;

impl NullAuth {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthStrategy for NullAuth {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn extract_credential(&self, request: &dyn AuthRequest) -> Option<String> {
        self.authorization_header(request)
    }

    async fn resolve_identity(&self, _request: &dyn AuthRequest) -> Option<User> {
        None
    }
}
