//! PostgreSQL Adapter Implementations

mod answer_store;

pub use answer_store::PgAnswerStore;
