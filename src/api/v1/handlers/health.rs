/*
 * Responsibility
 * - GET /status (疎通用, 認証除外)
 * - GET /unauthorized, /forbidden (エラーレスポンス形式の確認用)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;

pub async fn status() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "OK"})))
}

pub async fn unauthorized() -> AppError {
    AppError::Unauthorized
}

pub async fn forbidden() -> AppError {
    AppError::Forbidden
}
