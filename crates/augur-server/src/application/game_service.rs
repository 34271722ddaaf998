//! Game Application Service (Use Case)
//!
//! The controller behind the four game operations. Holds no game state
//! itself: sessions live in the registry, answer facts in the store.

use std::sync::Arc;

use uuid::Uuid;

use augur::{AnswerStore, Character, GameError, Question, SessionRegistry};

use crate::services::deduction::Deduction;

/// Application service for the guessing game
pub struct GameService<S: AnswerStore> {
    registry: Arc<SessionRegistry>,
    deduction: Deduction<S>,
}

impl<S: AnswerStore> GameService<S> {
    pub fn new(registry: Arc<SessionRegistry>, store: Arc<S>) -> Self {
        Self {
            registry,
            deduction: Deduction::new(store),
        }
    }

    /// Start a new game and return its session id
    pub fn start(&self) -> Uuid {
        let id = self.registry.create();
        tracing::info!("Started game session {}", id);
        id
    }

    /// A question the session has not answered yet. `Ok(None)` once every
    /// question is answered; the client is expected to end the game then.
    pub async fn next_question(&self, id: Uuid) -> Result<Option<Question>, GameError> {
        let session = self.registry.snapshot(id)?;
        self.deduction.select_question(&session).await
    }

    /// Record one answer into the session (re-answering overwrites)
    pub fn record_answer(&self, id: Uuid, question_id: i64, answer: bool) -> Result<(), GameError> {
        self.registry.record_answer(id, question_id, answer)
    }

    /// End the game: the session is consumed first, then matched against
    /// the answer patterns. `Ok(None)` when no unique character fits.
    pub async fn finish(&self, id: Uuid) -> Result<Option<Character>, GameError> {
        let session = self.registry.end(id)?;
        tracing::info!(
            "Ended game session {} after {} answer(s)",
            id,
            session.answers.len()
        );
        self.deduction.guess(&session).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Minimal in-memory store: two questions, two characters split on
    /// the second question.
    struct TwoCharacterStore;

    fn facts_for(name: &str) -> HashMap<i64, bool> {
        match name {
            "Ada Lovelace" => HashMap::from([(1, true), (2, false)]),
            _ => HashMap::from([(1, true), (2, true)]),
        }
    }

    #[async_trait]
    impl AnswerStore for TwoCharacterStore {
        async fn next_question(&self, exclude: &[i64]) -> Result<Option<Question>, GameError> {
            Ok([1_i64, 2]
                .iter()
                .find(|id| !exclude.contains(id))
                .copied()
                .map(|id| Question {
                    id,
                    text: format!("question {}", id),
                }))
        }

        async fn match_character(
            &self,
            answers: &HashMap<i64, bool>,
        ) -> Result<Option<Character>, GameError> {
            let matches: Vec<&str> = ["Ada Lovelace", "Count Dracula"]
                .into_iter()
                .filter(|name| {
                    let facts = facts_for(name);
                    answers.iter().all(|(q, a)| facts.get(q) == Some(a))
                })
                .collect();

            if matches.len() == 1 {
                Ok(Some(Character {
                    id: 1,
                    name: matches[0].to_string(),
                }))
            } else {
                Ok(None)
            }
        }
    }

    fn service() -> GameService<TwoCharacterStore> {
        GameService::new(Arc::new(SessionRegistry::new()), Arc::new(TwoCharacterStore))
    }

    #[tokio::test]
    async fn full_game_narrows_to_a_unique_character() {
        let service = service();
        let id = service.start();

        let first = service.next_question(id).await.unwrap().unwrap();
        assert_eq!(first.id, 1);
        service.record_answer(id, first.id, true).unwrap();

        let second = service.next_question(id).await.unwrap().unwrap();
        assert_eq!(second.id, 2);
        service.record_answer(id, second.id, false).unwrap();

        // Both questions answered: the explicit empty result, not an error
        assert!(service.next_question(id).await.unwrap().is_none());

        let guess = service.finish(id).await.unwrap();
        assert_eq!(guess.map(|c| c.name), Some("Ada Lovelace".to_string()));
    }

    #[tokio::test]
    async fn finishing_without_answers_cannot_guess() {
        let service = service();
        let id = service.start();

        let guess = service.finish(id).await.unwrap();
        assert!(guess.is_none());
    }

    #[tokio::test]
    async fn finished_session_rejects_every_operation() {
        let service = service();
        let id = service.start();
        service.finish(id).await.unwrap();

        assert!(matches!(
            service.next_question(id).await,
            Err(GameError::InvalidSession)
        ));
        assert!(matches!(
            service.record_answer(id, 1, true),
            Err(GameError::InvalidSession)
        ));
        assert!(matches!(
            service.finish(id).await,
            Err(GameError::InvalidSession)
        ));
    }

    #[tokio::test]
    async fn ambiguous_game_ends_without_guess() {
        let service = service();
        let id = service.start();
        // Both characters answer question 1 with true
        service.record_answer(id, 1, true).unwrap();

        let guess = service.finish(id).await.unwrap();
        assert!(guess.is_none());
    }
}
