/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, AUTH_TYPE, SESSION_* など)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - SESSION_DURATION だけは不正値でも失敗させず 0 (無期限) に倒す
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::services::auth::credentials::DEFAULT_SESSION_COOKIE_NAME;

/// Exclusion rules used when `AUTH_EXCLUDED_PATHS` is not set.
pub const DEFAULT_EXCLUDED_PATHS: &[&str] = &[
    "/api/v1/status/",
    "/api/v1/unauthorized/",
    "/api/v1/forbidden/",
    "/api/v1/auth_session/login/",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Which authentication strategy the server runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// Header-only baseline, never resolves a user.
    Auth,
    SessionAuth,
    SessionExpAuth,
}

impl FromStr for AuthType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auth" => Ok(Self::Auth),
            "session_auth" => Ok(Self::SessionAuth),
            "session_exp_auth" => Ok(Self::SessionExpAuth),
            _ => Err(ConfigError::Invalid("AUTH_TYPE")),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub app_env: AppEnv,

    pub auth_type: AuthType,
    pub excluded_paths: Vec<String>,
    pub session_cookie_name: String,
    // seconds; <= 0 means sessions never expire
    pub session_duration: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let app_env = AppEnv::from_env();

        let auth_type = std::env::var("AUTH_TYPE")
            .unwrap_or_default()
            .parse::<AuthType>()?;

        let excluded_paths = parse_excluded_paths(std::env::var("AUTH_EXCLUDED_PATHS").ok());

        let session_cookie_name = std::env::var("SESSION_NAME")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_COOKIE_NAME.to_string());

        let session_duration =
            parse_session_duration(std::env::var("SESSION_DURATION").ok().as_deref());

        Ok(Self {
            addr,
            database_url,
            app_env,
            auth_type,
            excluded_paths,
            session_cookie_name,
            session_duration,
        })
    }
}

/// Missing or unparsable → 0 (expiry disabled).
pub fn parse_session_duration(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0)
}

/// Comma-separated list; unset falls back to [`DEFAULT_EXCLUDED_PATHS`].
/// Set but empty means "no exclusions".
pub fn parse_excluded_paths(raw: Option<String>) -> Vec<String> {
    match raw {
        Some(raw) => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => DEFAULT_EXCLUDED_PATHS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}
