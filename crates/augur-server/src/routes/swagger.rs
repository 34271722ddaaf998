//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AnswerRequest, AnswerResponse, GuessResponse, QuestionPayload, QuestionResponse,
    StartGameResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::game::start_game,
        super::game::next_question,
        super::game::submit_answer,
        super::game::end_game,
    ),
    info(
        title = "Augur API",
        version = "0.1.0",
        description = "A twenty-questions guessing game: answer yes/no questions and the server deduces your character from its answer-pattern database.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Game", description = "Game - session lifecycle and deduction"),
    ),
    components(
        schemas(
            StartGameResponse,
            QuestionPayload,
            QuestionResponse,
            AnswerRequest,
            AnswerResponse,
            GuessResponse,
        )
    )
)]
pub struct ApiDoc;
