/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: 認証判定 / session cookie, http: request id・trace・limit・timeout
 */
pub mod auth;
pub mod http;
