//! Factory: build the active `AuthStrategy` from application `Config`.
use std::sync::Arc;

use crate::config::{AuthType, Config};
use crate::services::auth::{
    AuthStrategy, CookieSessionAuth, ExpiringSessionAuth, NullAuth, SessionStore, UserResolver,
};

pub fn build_auth_strategy(
    config: &Config,
    store: Arc<SessionStore>,
    users: Arc<dyn UserResolver>,
) -> Arc<dyn AuthStrategy> {
    strategy_for(
        config.auth_type,
        &config.session_cookie_name,
        config.session_duration,
        store,
        users,
    )
}

fn strategy_for(
    auth_type: AuthType,
    cookie_name: &str,
    session_duration: i64,
    store: Arc<SessionStore>,
    users: Arc<dyn UserResolver>,
) -> Arc<dyn AuthStrategy> {
    match auth_type {
        AuthType::Auth => Arc::new(NullAuth::new()),
        AuthType::SessionAuth => Arc::new(CookieSessionAuth::new(store, users, cookie_name)),
        AuthType::SessionExpAuth => Arc::new(ExpiringSessionAuth::new(
            CookieSessionAuth::new(store, users, cookie_name),
            session_duration,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::InMemoryUserResolver;

    fn build(auth_type: AuthType) -> Arc<dyn AuthStrategy> {
        strategy_for(
            auth_type,
            "sid",
            30,
            Arc::new(SessionStore::new()),
            Arc::new(InMemoryUserResolver::new()),
        )
    }

    #[test]
    fn picks_the_configured_variant() {
        assert_eq!(build(AuthType::Auth).name(), "auth");
        assert_eq!(build(AuthType::SessionAuth).name(), "session_auth");
        assert_eq!(build(AuthType::SessionExpAuth).name(), "session_exp_auth");
    }

    #[test]
    fn session_variants_use_the_cookie_name() {
        assert_eq!(build(AuthType::Auth).session_cookie_name(), None);
        assert_eq!(build(AuthType::SessionAuth).session_cookie_name(), Some("sid"));
        assert_eq!(
            build(AuthType::SessionExpAuth).session_cookie_name(),
            Some("sid")
        );
    }
}
