/*
 * Responsibility
 * - 認証レイヤの公開インターフェース (re-export)
 * - path 判定 / credential 抽出 / session / strategy
 */
pub mod credentials;
pub mod factory;
pub mod null_auth;
pub mod path_matcher;
pub mod request;
pub mod session_auth;
pub mod session_exp_auth;
pub mod session_store;
pub mod strategy;
pub mod user_resolver;

pub use factory::build_auth_strategy;
pub use null_auth::NullAuth;
pub use path_matcher::{ExcludedPaths, ExclusionRule, require_auth};
pub use request::AuthRequest;
pub use session_auth::CookieSessionAuth;
pub use session_exp_auth::ExpiringSessionAuth;
pub use session_store::{Session, SessionStore};
pub use strategy::{AuthDecision, AuthStrategy, RejectReason};
pub use user_resolver::{InMemoryUserResolver, User, UserResolver};
