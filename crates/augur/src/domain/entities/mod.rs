//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Character: a guessable character with its display name
//! - Question: a yes/no question from the catalogue
//! - GameSession: one in-progress game and its accumulated answers

mod character;
mod question;
mod session;

pub use character::*;
pub use question::*;
pub use session::*;
