//! Augur Wire Models
//!
//! Request/response DTOs for the game endpoints.

mod game;

pub use game::*;
