//! Answer Store Port
//!
//! Abstract interface over the persisted answer-pattern database:
//! known characters, known questions, and the boolean answer each
//! character gives to each question.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{Character, GameError, Question};

/// Data access for the deduction substrate. Pure reads, no deduction
/// policy beyond the uniqueness rule of `match_character`.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// A uniformly-random question whose id is not in `exclude`,
    /// or `None` when no eligible question remains.
    async fn next_question(&self, exclude: &[i64]) -> Result<Option<Question>, GameError>;

    /// The single character whose answer facts agree with every entry of
    /// `answers`. Zero matches and multiple matches both yield `None`:
    /// ambiguity is a failure state, never resolved by preference.
    async fn match_character(
        &self,
        answers: &HashMap<i64, bool>,
    ) -> Result<Option<Character>, GameError>;
}
