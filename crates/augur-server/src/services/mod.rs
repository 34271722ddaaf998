//! Game Services
//!
//! - Deduction: narrows candidate characters from a session's answers
//! - Sweeper: background eviction of abandoned sessions

pub mod deduction;
pub mod sweeper;
