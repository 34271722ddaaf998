//! GameSession - one in-progress game and its accumulated answers

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One active game: the player's answers so far, keyed by question id.
///
/// The map holds at most one entry per question id; re-answering a
/// question overwrites the previous value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub id: Uuid,
    pub answers: HashMap<i64, bool>,
    pub started_at: DateTime<Utc>,
    pub last_touched: DateTime<Utc>,
}

impl GameSession {
    /// Create a fresh session with a random identifier and no answers
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            answers: HashMap::new(),
            started_at: now,
            last_touched: now,
        }
    }

    /// Record an answer (upsert: a repeated question id overwrites)
    pub fn record_answer(&mut self, question_id: i64, answer: bool) {
        self.answers.insert(question_id, answer);
        self.touch();
    }

    /// Ids of every question already answered in this session
    pub fn answered_ids(&self) -> Vec<i64> {
        self.answers.keys().copied().collect()
    }

    /// Refresh the idle timer
    pub fn touch(&mut self) {
        self.last_touched = Utc::now();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_no_answers() {
        let session = GameSession::new();
        assert!(session.answers.is_empty());
    }

    #[test]
    fn record_answer_overwrites_instead_of_duplicating() {
        let mut session = GameSession::new();
        session.record_answer(1, true);
        session.record_answer(2, false);
        session.record_answer(1, false);

        // Three submissions, two distinct question ids
        assert_eq!(session.answers.len(), 2);
        assert_eq!(session.answers.get(&1), Some(&false));
        assert_eq!(session.answers.get(&2), Some(&false));
    }

    #[test]
    fn answered_ids_reflects_distinct_questions() {
        let mut session = GameSession::new();
        session.record_answer(7, true);
        session.record_answer(7, true);
        session.record_answer(9, false);

        let mut ids = session.answered_ids();
        ids.sort();
        assert_eq!(ids, vec![7, 9]);
    }
}
