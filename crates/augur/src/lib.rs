//! Augur Domain Library
//!
//! Core domain types and interfaces for the Augur character-guessing game.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Character, Question, GameSession)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `AnswerStore`: access to the persisted answer-pattern database
//!
//! - **Registry** (`registry`): process-wide session lifecycle management
//!
//! # Usage
//!
//! ```rust,ignore
//! use augur::{AnswerStore, GameSession, SessionRegistry};
//! ```

pub mod domain;
pub mod ports;
pub mod registry;

// Re-export commonly used types
pub use domain::{Character, GameError, GameSession, Question};
pub use ports::AnswerStore;
pub use registry::SessionRegistry;
