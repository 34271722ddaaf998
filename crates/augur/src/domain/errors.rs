//! Domain Errors
//!
//! Error types for game operations.

use thiserror::Error;

/// Domain layer errors
///
/// Every failure reflects either caller misuse or an outage of the answer
/// store; nothing is recoverable inside the core, so these propagate
/// unchanged to the boundary that translates them to protocol responses.
#[derive(Debug, Error)]
pub enum GameError {
    /// The session identifier is unknown or the game has already ended.
    #[error("invalid game session")]
    InvalidSession,

    /// The answer payload is missing a field or carries a wrong type.
    #[error("malformed answer payload: {0}")]
    MalformedInput(String),

    /// The answer store failed at the I/O or constraint level.
    #[error("answer store unavailable: {0}")]
    StoreUnavailable(String),
}
