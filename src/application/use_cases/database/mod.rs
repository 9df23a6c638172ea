//! Database Use Cases
//!
//! Bringing the process database online.

mod initialize_database;

pub use initialize_database::InitializeDatabaseUseCase;
