//! Augur API Routes
//!
//! - /game/start - begin a game session
//! - /game/:session_id/question - fetch a random unanswered question
//! - /game/:session_id/answer - submit a yes/no answer
//! - /game/:session_id/end - end the game and receive the guess

pub mod game;
pub mod swagger;
