/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: 選択された AuthStrategy (SessionStore を内包)
 *   - users: UserResolver, excluded_paths: 認証除外パス
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::config::AppEnv;
use crate::services::auth::{AuthStrategy, ExcludedPaths, UserResolver};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthStrategy>,
    pub users: Arc<dyn UserResolver>,
    pub excluded_paths: Arc<ExcludedPaths>,
    pub app_env: AppEnv,
}

impl AppState {
    pub fn new(
        auth: Arc<dyn AuthStrategy>,
        users: Arc<dyn UserResolver>,
        excluded_paths: ExcludedPaths,
        app_env: AppEnv,
    ) -> Self {
        Self {
            auth,
            users,
            excluded_paths: Arc::new(excluded_paths),
            app_env,
        }
    }

    /// Session cookies get the `Secure` flag outside development.
    pub fn secure_cookies(&self) -> bool {
        self.app_env.is_production()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .field("excluded_paths", &self.excluded_paths)
            .field("app_env", &self.app_env)
            .finish()
    }
}
