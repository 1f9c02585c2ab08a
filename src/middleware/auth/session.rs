//! 全リクエストに対する認証判定 → AuthCtx を extensions に入れる
//!
//! - 除外パス (AUTH_EXCLUDED_PATHS) は判定せずに通す
//! - credential が無ければ 401、あっても user に解決できなければ 403
//! - 判定ロジック自体は services::auth の AuthStrategy に閉じ込める

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::AuthDecision;
use crate::state::AppState;

/// Router 全体に認証判定を掛ける。
///
/// nest 済みの Router に掛けること (path は `/api/v1/...` のまま判定したい)。
/// ```ignore
/// let app = Router::new().nest("/api/v1", api::v1::routes());
/// let app = middleware::auth::session::apply(app, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, session_middleware))
}

async fn session_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // Body is not Sync, so the strategy only sees the head of the request.
    let (mut parts, body) = req.into_parts();

    let decision = state
        .auth
        .authenticate(&parts, &state.excluded_paths)
        .await;

    match decision {
        AuthDecision::NotRequired => {}
        AuthDecision::Authenticated(user) => {
            tracing::debug!(user_id = %user.id, auth_type = state.auth.name(), "authenticated");
            // middleware → extractor への受け渡し
            parts
                .extensions
                .insert(AuthCtx::new(user, state.auth.name()));
        }
        AuthDecision::Rejected(reason) => {
            tracing::warn!(
                path = %parts.uri.path(),
                reason = ?reason,
                auth_type = state.auth.name(),
                "request rejected"
            );
            return Err(reason.into());
        }
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}
