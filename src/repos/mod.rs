/*
 * Responsibility
 * - 永続化層 (SQLx) の公開インターフェース
 */
pub mod error;
pub mod user_repo;
