//! Deduction Service - candidate narrowing over the answer store
//!
//! Two operations: pick an unanswered question for a session, and match
//! the session's full answer set against the stored answer patterns.

use std::sync::Arc;

use augur::{AnswerStore, Character, GameError, GameSession, Question};

/// Deduction over an answer store.
pub struct Deduction<S: AnswerStore> {
    store: Arc<S>,
}

impl<S: AnswerStore> Deduction<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// A random question the session has not answered yet, or `None`
    /// once every question is answered.
    pub async fn select_question(
        &self,
        session: &GameSession,
    ) -> Result<Option<Question>, GameError> {
        let answered = session.answered_ids();
        self.store.next_question(&answered).await
    }

    /// The unique character consistent with every answer in the session.
    ///
    /// An empty answer map is deterministically `None`: zero constraints
    /// match everything, which counts as unresolved, not as a guess.
    pub async fn guess(&self, session: &GameSession) -> Result<Option<Character>, GameError> {
        if session.answers.is_empty() {
            return Ok(None);
        }
        self.store.match_character(&session.answers).await
    }
}
