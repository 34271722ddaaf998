//! Game Routes
//!
//! HTTP handlers that delegate to GameService for the game logic and
//! translate `GameError` into protocol responses.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use augur::GameError;

use crate::models::{
    AnswerRequest, AnswerResponse, GuessResponse, QuestionResponse, StartGameResponse,
};
use crate::AppState;

/// Translate a domain error into its wire shape: client mistakes are 400,
/// a store outage is 500.
fn error_response(err: GameError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match err {
        GameError::InvalidSession | GameError::MalformedInput(_) => StatusCode::BAD_REQUEST,
        GameError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

/// Start a new game session
#[utoipa::path(
    get,
    path = "/game/start",
    responses(
        (status = 200, description = "New game session", body = StartGameResponse)
    ),
    tag = "Game"
)]
pub async fn start_game(State(state): State<AppState>) -> Json<StartGameResponse> {
    let session_id = state.game_service.start();
    Json(StartGameResponse { session_id })
}

/// Fetch a random unanswered question
#[utoipa::path(
    get,
    path = "/game/{session_id}/question",
    params(("session_id" = Uuid, Path, description = "Game session ID")),
    responses(
        (status = 200, description = "A question, or null once all are answered", body = QuestionResponse),
        (status = 400, description = "Invalid game session"),
        (status = 500, description = "Answer store unavailable")
    ),
    tag = "Game"
)]
pub async fn next_question(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<QuestionResponse>, (StatusCode, Json<serde_json::Value>)> {
    let question = state
        .game_service
        .next_question(session_id)
        .await
        .map_err(error_response)?;

    Ok(Json(QuestionResponse {
        question: question.map(Into::into),
    }))
}

/// Submit a yes/no answer for a question
#[utoipa::path(
    post,
    path = "/game/{session_id}/answer",
    params(("session_id" = Uuid, Path, description = "Game session ID")),
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Answer recorded", body = AnswerResponse),
        (status = 400, description = "Invalid game session or malformed payload")
    ),
    tag = "Game"
)]
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<AnswerResponse>, (StatusCode, Json<serde_json::Value>)> {
    let request = AnswerRequest::from_value(payload).map_err(error_response)?;

    state
        .game_service
        .record_answer(session_id, request.question_id, request.answer)
        .map_err(error_response)?;

    Ok(Json(AnswerResponse {
        message: "answer has been recorded".to_string(),
    }))
}

/// End the game and receive the guess
#[utoipa::path(
    get,
    path = "/game/{session_id}/end",
    params(("session_id" = Uuid, Path, description = "Game session ID")),
    responses(
        (status = 200, description = "A unique character matched", body = GuessResponse),
        (status = 404, description = "No unique character matched", body = GuessResponse),
        (status = 400, description = "Invalid game session"),
        (status = 500, description = "Answer store unavailable")
    ),
    tag = "Game"
)]
pub async fn end_game(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<(StatusCode, Json<GuessResponse>), (StatusCode, Json<serde_json::Value>)> {
    let guess = state
        .game_service
        .finish(session_id)
        .await
        .map_err(error_response)?;

    match guess {
        Some(character) => Ok((
            StatusCode::OK,
            Json(GuessResponse {
                message: "game ended successfully".to_string(),
                guess: character.name,
            }),
        )),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(GuessResponse {
                message: "game ended successfully".to_string(),
                guess: "sorry, i couldn't guess the character".to_string(),
            }),
        )),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/game/start", get(start_game))
        .route("/game/:session_id/question", get(next_question))
        .route("/game/:session_id/answer", post(submit_answer))
        .route("/game/:session_id/end", get(end_game))
}
