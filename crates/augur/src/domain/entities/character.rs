//! Character - a guessable character
//!
//! Characters are created by an external data-loading process and are
//! immutable afterwards; the game only ever reads them.

use serde::{Deserialize, Serialize};

/// A character the deduction can land on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
}
