use async_trait::async_trait;
use dashmap::DashMap;

use crate::core::error::AppResult;
use crate::core::types::Session;

/// Per-user conversation storage.
///
/// A missing entry means the user is idle. Implementations only ever touch
/// the entry of the user passed in.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the user's session, or an idle default when there is none.
    async fn load(&self, user_id: i64) -> AppResult<Session>;

    /// Replaces the user's session.
    async fn save(&self, user_id: i64, session: Session) -> AppResult<()>;

    /// Drops the user's session, returning them to idle.
    async fn clear(&self, user_id: i64) -> AppResult<()>;
}

/// Sessions kept in process memory; lost on restart
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<i64, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a conversation in progress
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, user_id: i64) -> AppResult<Session> {
        Ok(self
            .sessions
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn save(&self, user_id: i64, session: Session) -> AppResult<()> {
        self.sessions.insert(user_id, session);
        Ok(())
    }

    async fn clear(&self, user_id: i64) -> AppResult<()> {
        self.sessions.remove(&user_id);
        Ok(())
    }
}
