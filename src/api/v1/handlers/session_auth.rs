/*
 * Responsibility
 * - POST /auth_session/login: user_id から session を作成し cookie を返す
 * - DELETE /auth_session/logout: cookie の session を破棄する
 *
 * Notes
 * - login は資格情報 (password 等) を検証しない。呼び出し側で本人確認済みの user_id を渡す前提
 *   (token endpoint が上流の sub を信頼するのと同じ)
 */
use axum::{Json, extract::State, http::HeaderMap};
use serde_json::{Value, json};

use crate::api::v1::dto::{session::LoginRequest, users::UserResponse};
use crate::error::AppError;
use crate::middleware::auth::session_cookie::{
    append_cookie, clear_session_cookie, create_session_cookie,
};
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<UserResponse>), AppError> {
    let user_id = req
        .validate()
        .map_err(|msg| AppError::bad_request("INVALID_USER_ID", msg))?;

    let cookie_name = state
        .auth
        .session_cookie_name()
        .ok_or_else(|| {
            AppError::bad_request(
                "SESSIONS_DISABLED",
                "the active auth type does not support sessions",
            )
        })?
        .to_string();

    let user = state
        .users
        .get(user_id)
        .await
        .ok_or(AppError::not_found("user"))?;

    let session_id = state.auth.create_session(&user.id).ok_or_else(|| {
        tracing::error!(user_id = %user.id, "session creation failed");
        AppError::Internal
    })?;

    let mut headers = HeaderMap::new();
    append_cookie(
        &mut headers,
        &create_session_cookie(&cookie_name, &session_id, state.secure_cookies()),
    );

    Ok((headers, Json(user.into())))
}

pub async fn logout(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Result<(HeaderMap, Json<Value>), AppError> {
    if !state.auth.destroy_session(&request_headers) {
        return Err(AppError::not_found("session"));
    }

    let mut headers = HeaderMap::new();
    if let Some(name) = state.auth.session_cookie_name() {
        append_cookie(
            &mut headers,
            &clear_session_cookie(name, state.secure_cookies()),
        );
    }

    Ok((headers, Json(json!({}))))
}
