//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! external systems. Implementations live in the infrastructure layer.

mod answer_store;

pub use answer_store::*;
