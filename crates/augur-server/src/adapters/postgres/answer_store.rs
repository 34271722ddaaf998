//! PostgreSQL implementation of AnswerStore

use std::collections::HashMap;

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use sqlx::PgPool;

use augur::{AnswerStore, Character, GameError, Question};

/// PostgreSQL implementation of AnswerStore
pub struct PgAnswerStore {
    pool: PgPool,
}

impl PgAnswerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            text: row.question,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CharacterRow {
    id: i64,
    character_name: String,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            id: row.id,
            name: row.character_name,
        }
    }
}

#[async_trait]
impl AnswerStore for PgAnswerStore {
    async fn next_question(&self, exclude: &[i64]) -> Result<Option<Question>, GameError> {
        // Fetch the eligible rows and pick uniformly in process, instead of
        // leaning on the database's random ordering.
        let rows = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question FROM questions WHERE NOT (id = ANY($1))",
        )
        .bind(exclude)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GameError::StoreUnavailable(e.to_string()))?;

        let questions: Vec<Question> = rows.into_iter().map(Into::into).collect();

        let mut rng = rand::rng();
        Ok(questions.choose(&mut rng).cloned())
    }

    async fn match_character(
        &self,
        answers: &HashMap<i64, bool>,
    ) -> Result<Option<Character>, GameError> {
        let (question_ids, given): (Vec<i64>, Vec<bool>) =
            answers.iter().map(|(id, answer)| (*id, *answer)).unzip();

        // A character matches when it has an agreeing fact for every given
        // (question, answer) pair.
        let mut rows = sqlx::query_as::<_, CharacterRow>(
            r#"
            SELECT c.id, c.character_name
            FROM characters c
            INNER JOIN answers a ON a.character_id = c.id
            INNER JOIN unnest($1::bigint[], $2::boolean[]) AS given (question_id, answer)
                ON a.question_id = given.question_id AND a.answer = given.answer
            GROUP BY c.id, c.character_name
            HAVING COUNT(DISTINCT a.question_id) = $3
            "#,
        )
        .bind(&question_ids)
        .bind(&given)
        .bind(question_ids.len() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GameError::StoreUnavailable(e.to_string()))?;

        // More than one consistent character is ambiguity, reported as
        // "no match" rather than an arbitrary pick.
        if rows.len() == 1 {
            Ok(rows.pop().map(Into::into))
        } else {
            Ok(None)
        }
    }
}
