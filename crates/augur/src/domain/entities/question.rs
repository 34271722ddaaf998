//! Question - a yes/no question from the catalogue
//!
//! Same lifecycle as characters: loaded externally, read-only here.

use serde::{Deserialize, Serialize};

/// A yes/no question presented to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
}
