/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /status, /unauthorized, /forbidden, /users/me, /auth_session/{login,logout}
 * - 認証の要否はここではなく middleware::auth::session + 除外パス設定で決める
 */
use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::{forbidden, status, unauthorized},
    session_auth::{login, logout},
    users::me,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(status))
        .route("/unauthorized", get(unauthorized))
        .route("/forbidden", get(forbidden))
        .route("/users/me", get(me))
        .route("/auth_session/login", post(login))
        .route("/auth_session/logout", delete(logout))
}
