/*
 * Responsibility
 * - Users の response DTO
 */
use serde::Serialize;

use crate::services::auth::User;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub user_name: String,
    pub image_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            image_url: user.image_url,
        }
    }
}
