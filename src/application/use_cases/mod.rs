//! Use Cases
//!
//! Each use case is a single-purpose struct with an execute() method.

pub mod database;

pub use database::InitializeDatabaseUseCase;
