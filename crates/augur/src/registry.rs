//! SessionRegistry - concurrent per-session access via DashMap.
//!
//! The registry is the sole owner of session lifetime: sessions exist
//! from `create` until `end` (or idle eviction). DashMap gives per-entry
//! locking, so games on different session ids never block each other
//! while operations on one id stay serialized.

use std::time::Duration;

use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{GameError, GameSession};

/// Process-wide mapping from session id to live game state.
pub struct SessionRegistry {
    sessions: DashMap<Uuid, GameSession>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Register a fresh session and return its identifier.
    pub fn create(&self) -> Uuid {
        let session = GameSession::new();
        let id = session.id;
        self.sessions.insert(id, session);
        id
    }

    /// Cloned view of a session, refreshing its idle timer.
    /// Fails with `InvalidSession` for unknown or ended ids.
    pub fn snapshot(&self, id: Uuid) -> Result<GameSession, GameError> {
        let mut entry = self.sessions.get_mut(&id).ok_or(GameError::InvalidSession)?;
        entry.touch();
        Ok(entry.clone())
    }

    /// Upsert an answer into a session's map.
    pub fn record_answer(&self, id: Uuid, question_id: i64, answer: bool) -> Result<(), GameError> {
        let mut entry = self.sessions.get_mut(&id).ok_or(GameError::InvalidSession)?;
        entry.record_answer(question_id, answer);
        Ok(())
    }

    /// Atomically remove and return a session. The identifier is
    /// permanently invalid afterwards.
    pub fn end(&self, id: Uuid) -> Result<GameSession, GameError> {
        self.sessions
            .remove(&id)
            .map(|(_, session)| session)
            .ok_or(GameError::InvalidSession)
    }

    /// Drop every session idle for longer than `ttl`. Returns how many
    /// were evicted.
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let Ok(ttl) = chrono::Duration::from_std(ttl) else {
            return 0;
        };
        let cutoff = chrono::Utc::now() - ttl;
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.last_touched >= cutoff);
        before - self.sessions.len()
    }

    /// Number of active sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is active.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_snapshot_roundtrips() {
        let registry = SessionRegistry::new();
        let id = registry.create();

        let session = registry.snapshot(id).unwrap();
        assert_eq!(session.id, id);
        assert!(session.answers.is_empty());
    }

    #[test]
    fn unknown_id_is_invalid_session() {
        let registry = SessionRegistry::new();
        let id = Uuid::new_v4();

        assert!(matches!(
            registry.snapshot(id),
            Err(GameError::InvalidSession)
        ));
        assert!(matches!(
            registry.record_answer(id, 1, true),
            Err(GameError::InvalidSession)
        ));
        assert!(matches!(registry.end(id), Err(GameError::InvalidSession)));
    }

    #[test]
    fn record_answer_upserts_into_session() {
        let registry = SessionRegistry::new();
        let id = registry.create();

        registry.record_answer(id, 3, true).unwrap();
        registry.record_answer(id, 3, false).unwrap();
        registry.record_answer(id, 5, true).unwrap();

        let session = registry.snapshot(id).unwrap();
        assert_eq!(session.answers.len(), 2);
        assert_eq!(session.answers.get(&3), Some(&false));
    }

    #[test]
    fn end_removes_session_permanently() {
        let registry = SessionRegistry::new();
        let id = registry.create();
        registry.record_answer(id, 1, true).unwrap();

        let session = registry.end(id).unwrap();
        assert_eq!(session.answers.len(), 1);

        // Every further operation on the id is rejected
        assert!(matches!(registry.end(id), Err(GameError::InvalidSession)));
        assert!(matches!(
            registry.snapshot(id),
            Err(GameError::InvalidSession)
        ));
        assert!(matches!(
            registry.record_answer(id, 2, false),
            Err(GameError::InvalidSession)
        ));
    }

    #[test]
    fn evict_idle_drops_only_stale_sessions() {
        let registry = SessionRegistry::new();
        let stale = registry.create();
        let fresh = registry.create();

        // Age the first session past the cutoff
        registry
            .sessions
            .get_mut(&stale)
            .unwrap()
            .last_touched = chrono::Utc::now() - chrono::Duration::seconds(120);

        let evicted = registry.evict_idle(Duration::from_secs(60));
        assert_eq!(evicted, 1);
        assert!(matches!(
            registry.snapshot(stale),
            Err(GameError::InvalidSession)
        ));
        assert!(registry.snapshot(fresh).is_ok());
    }
}
