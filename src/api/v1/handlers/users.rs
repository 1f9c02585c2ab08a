/*
 * Responsibility
 * - GET /users/me
 * - middleware が入れた AuthCtx をそのまま返す (DB へは再問い合わせしない)
 */
use axum::Json;

use crate::api::v1::{dto::users::UserResponse, extractors::AuthCtxExtractor};

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<UserResponse> {
    tracing::debug!(user_id = %ctx.user.id, auth_type = ctx.auth_type, "users/me");
    Json(ctx.user.into())
}
