/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - session の検証ロジックは middleware/services 側の責務
 * - ここは「型（契約）」として固定化する
 */
use crate::services::auth::User;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user` は UserResolver が返したユーザー
/// - `auth_type` はどの strategy で通ったか (ログ相関用)
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user: User,
    pub auth_type: &'static str,
}

impl AuthCtx {
    pub fn new(user: User, auth_type: &'static str) -> Self {
        Self { user, auth_type }
    }
}
