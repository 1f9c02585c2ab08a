/*
 * Responsibility
 * - session id → Session の in-memory ストア (process 内共有、永続化なし)
 * - session id の生成 (OS CSPRNG, 32 bytes)
 * - 期限切れ判定はここではしない (strategy 側の責務)
 */
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

/// A stored session.
///
/// `created_at` is only stamped by strategies that expire sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Shared session map.
///
/// Readers get owned clones, so an entry is always seen either whole or not
/// at all.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a session under a fresh random id.
    ///
    /// Returns `None` only when the OS random source fails.
    pub fn create(&self, user_id: &str, created_at: Option<DateTime<Utc>>) -> Option<Session> {
        loop {
            let id = generate_session_id()?;
            let session = Session {
                id,
                user_id: user_id.to_string(),
                created_at,
            };

            // a 256-bit collision is not expected, but never overwrite
            if self.insert(session.clone()) {
                return Some(session);
            }
        }
    }

    /// Insert if the id is not taken. Returns `false` on collision.
    pub fn insert(&self, session: Session) -> bool {
        let mut sessions = self.sessions.write();
        match sessions.entry(session.id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(session);
                true
            }
        }
    }

    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions.read().get(session_id).cloned()
    }

    pub fn remove(&self, session_id: &str) -> Option<Session> {
        self.sessions.write().remove(session_id)
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

fn generate_session_id() -> Option<String> {
    // 32 bytes of entropy -> URL-safe base64 without padding (cookie-safe).
    let mut bytes = [0u8; 32];
    if let Err(err) = getrandom::fill(&mut bytes) {
        tracing::error!(error = %err, "os random source failed");
        return None;
    }

    Some(URL_SAFE_NO_PAD.encode(bytes))
}

/// Short, non-secret form of a session id for log lines.
pub fn redact_session_id(session_id: &str) -> &str {
    session_id.get(..6).unwrap_or(session_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn create_then_get() {
        let store = SessionStore::new();
        let session = store.create("u1", None).unwrap();

        assert_eq!(session.user_id, "u1");
        assert_eq!(session.id.len(), 43);
        assert_eq!(store.get(&session.id), Some(session));
    }

    #[test]
    fn ids_are_unique() {
        let store = SessionStore::new();
        let ids: HashSet<String> = (0..1000)
            .map(|i| store.create(&format!("user-{i}"), None).unwrap().id)
            .collect();

        assert_eq!(ids.len(), 1000);
        assert_eq!(store.len(), 1000);
    }

    #[test]
    fn insert_never_overwrites() {
        let store = SessionStore::new();
        let first = Session {
            id: "fixed".into(),
            user_id: "a".into(),
            created_at: None,
        };
        let second = Session {
            user_id: "b".into(),
            ..first.clone()
        };

        assert!(store.insert(first));
        assert!(!store.insert(second));
        assert_eq!(store.get("fixed").unwrap().user_id, "a");
    }

    #[test]
    fn remove_drops_the_entry() {
        let store = SessionStore::new();
        let session = store.create("u1", Some(Utc::now())).unwrap();

        assert_eq!(store.remove(&session.id).map(|s| s.user_id), Some("u1".into()));
        assert_eq!(store.get(&session.id), None);
        assert_eq!(store.remove(&session.id), None);
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_create_and_remove() {
        let store = Arc::new(SessionStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let mut kept = Vec::new();
                    for i in 0..200 {
                        let user = format!("t{t}-u{i}");
                        let s = store.create(&user, None).unwrap();
                        assert_eq!(store.get(&s.id).unwrap().user_id, user);
                        if i % 2 == 0 {
                            assert!(store.remove(&s.id).is_some());
                        } else {
                            kept.push(s.id);
                        }
                    }
                    kept
                })
            })
            .collect();

        let kept: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(store.len(), kept.len());
        assert_eq!(kept.len(), 8 * 100);
    }

    #[test]
    fn redacted_id_is_a_prefix() {
        assert_eq!(redact_session_id("abcdefghij"), "abcdef");
        assert_eq!(redact_session_id("abc"), "abc");
    }
}
