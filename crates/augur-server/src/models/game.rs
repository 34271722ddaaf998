//! Game endpoint DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use augur::{GameError, Question};

/// Response for a started game
#[derive(Debug, Serialize, ToSchema)]
pub struct StartGameResponse {
    pub session_id: Uuid,
}

/// A question presented to the player
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionPayload {
    pub id: i64,
    pub question: String,
}

impl From<Question> for QuestionPayload {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question: question.text,
        }
    }
}

/// Next-question response. `question` is null once every question has
/// been answered; the client should end the game at that point.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionResponse {
    pub question: Option<QuestionPayload>,
}

/// Answer submission
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnswerRequest {
    pub question_id: i64,
    pub answer: bool,
}

impl AnswerRequest {
    /// Parse a raw JSON body. A missing field or a wrong type (e.g. a
    /// string where the boolean belongs) is the caller's mistake, reported
    /// as `MalformedInput`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, GameError> {
        serde_json::from_value(value).map_err(|e| GameError::MalformedInput(e.to_string()))
    }
}

/// Acknowledgement for a recorded answer
#[derive(Debug, Serialize, ToSchema)]
pub struct AnswerResponse {
    pub message: String,
}

/// Final response for an ended game
#[derive(Debug, Serialize, ToSchema)]
pub struct GuessResponse {
    pub message: String,
    pub guess: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_formed_answer() {
        let request = AnswerRequest::from_value(json!({
            "question_id": 4,
            "answer": true
        }))
        .unwrap();

        assert_eq!(request.question_id, 4);
        assert!(request.answer);
    }

    #[test]
    fn missing_question_id_is_malformed() {
        let err = AnswerRequest::from_value(json!({ "answer": true })).unwrap_err();
        assert!(matches!(err, GameError::MalformedInput(_)));
    }

    #[test]
    fn missing_answer_is_malformed() {
        let err = AnswerRequest::from_value(json!({ "question_id": 4 })).unwrap_err();
        assert!(matches!(err, GameError::MalformedInput(_)));
    }

    #[test]
    fn non_boolean_answer_is_malformed() {
        let err = AnswerRequest::from_value(json!({
            "question_id": 4,
            "answer": "yes"
        }))
        .unwrap_err();
        assert!(matches!(err, GameError::MalformedInput(_)));

        let err = AnswerRequest::from_value(json!({
            "question_id": 4,
            "answer": 1
        }))
        .unwrap_err();
        assert!(matches!(err, GameError::MalformedInput(_)));
    }
}
