/*
 * Responsibility
 * - users テーブル向け SQLx 操作 (認証で必要な参照のみ)
 * - PgPool を受け取り UserResolver として振る舞う
 * - DB エラーは RepoError に変換し、resolver 境界では「見つからない」に倒す
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoResult;
use crate::services::auth::{User, UserResolver};

#[derive(Debug, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    #[sqlx(rename = "userName")]
    pub user_name: String,
    #[sqlx(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id.to_string(),
            user_name: row.user_name,
            image_url: row.image_url,
        }
    }
}

pub async fn get(db: &PgPool, user_id: Uuid) -> RepoResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "userName", "imageUrl"
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Postgres-backed user lookup.
#[derive(Clone, Debug)]
pub struct PgUserResolver {
    db: PgPool,
}

impl PgUserResolver {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserResolver for PgUserResolver {
    async fn get(&self, user_id: &str) -> Option<User> {
        // user ids are UUIDs in this schema; anything else cannot exist
        let id = Uuid::parse_str(user_id).ok()?;

        match get(&self.db, id).await {
            Ok(row) => row.map(User::from),
            Err(err) => {
                tracing::error!(user_id = %id, error = %err, "user lookup failed");
                None
            }
        }
    }
}
