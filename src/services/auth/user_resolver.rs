//! User lookup interface used to turn a session's user id into a user record.
use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

/// User record as seen by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub image_url: Option<String>,
}

/// Opaque user store keyed by user id.
///
/// Not-found and backend failures both come back as `None`; implementations
/// log the latter.
#[async_trait]
pub trait UserResolver: Send + Sync {
    async fn get(&self, user_id: &str) -> Option<User>;
}

/// Map-backed resolver, for tests and embedding without a database.
#[derive(Debug, Default)]
pub struct InMemoryUserResolver {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let resolver = Self::new();
        for user in users {
            resolver.insert(user);
        }
        resolver
    }

    pub fn insert(&self, user: User) {
        self.users.write().insert(user.id.clone(), user);
    }
}

#[async_trait]
impl UserResolver for InMemoryUserResolver {
    async fn get(&self, user_id: &str) -> Option<User> {
        self.users.read().get(user_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn bob() -> User {
        User {
            id: "u1".into(),
            user_name: "bob".into(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn in_memory_lookup() {
        let users = InMemoryUserResolver::with_users([bob()]);
        assert_eq!(users.get("u1").await, Some(bob()));
        assert_eq!(users.get("u2").await, None);
    }

    #[tokio::test]
    async fn shared_resolver_through_arc() {
        let users: Arc<dyn UserResolver> = Arc::new(InMemoryUserResolver::with_users([bob()]));
        let shared = Arc::clone(&users);
        assert_eq!(shared.get("u1").await.map(|u| u.user_name), Some("bob".into()));
    }
}
